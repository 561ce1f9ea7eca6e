use std::collections::BTreeMap;

use super::*;

#[derive(Debug, serde::Deserialize)]
pub(super) struct Fixture {
    /// Forces the list endpoint to answer with this status.
    #[serde(default)]
    pub(super) list_status: Option<u16>,

    pub(super) entries: Vec<FixtureEntry>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct FixtureEntry {
    pub(super) id: u32,
    pub(super) name: String,

    #[serde(default)]
    pub(super) artwork: Option<String>,
    #[serde(default)]
    pub(super) sprite: Option<String>,
    #[serde(default)]
    pub(super) types: Vec<String>,

    /// Localized names keyed by language code.
    #[serde(default)]
    pub(super) names: BTreeMap<String, String>,
    /// Flavor texts keyed by language code.
    #[serde(default)]
    pub(super) flavor: BTreeMap<String, String>,

    /// Forces the detail resource to answer with this status.
    #[serde(default)]
    pub(super) detail_status: Option<u16>,
    /// Forces the species resource to answer with this status.
    #[serde(default)]
    pub(super) species_status: Option<u16>,

    /// With `species_status`, still send the full species body instead of an error body.
    #[serde(default)]
    pub(super) species_status_keep_body: bool,
}

impl Fixture {
    pub(super) fn load(path: &std::path::Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read fixture {}", path.display()))?;
        let fixture: Fixture = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse fixture {}", path.display()))?;
        Ok(fixture)
    }

    pub(super) fn entry(&self, id: u32) -> Option<&FixtureEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

impl FixtureEntry {
    pub(super) fn detail_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "sprites": {
                "front_default": self.sprite,
                "other": {
                    "official-artwork": { "front_default": self.artwork }
                }
            },
            "types": self.types.iter().enumerate().map(|(i, t)| serde_json::json!({
                "slot": i + 1,
                "type": { "name": t, "url": "" }
            })).collect::<Vec<_>>(),
        })
    }

    pub(super) fn species_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "names": self.names.iter().map(|(lang, name)| serde_json::json!({
                "name": name,
                "language": { "name": lang, "url": "" }
            })).collect::<Vec<_>>(),
            "flavor_text_entries": self.flavor.iter().map(|(lang, text)| serde_json::json!({
                "flavor_text": text,
                "language": { "name": lang, "url": "" }
            })).collect::<Vec<_>>(),
        })
    }
}
