use serde::{Deserialize, Serialize};

use super::EntryId;

/// One catalog member, normalized from the detail resource. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,

    /// Canonical (source-language) name.
    pub name: String,

    /// Empty when the API has no sprite for this entry.
    #[serde(default)]
    pub sprite_url: String,

    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_description: Option<String>,
}

impl LocalizedInfo {
    pub fn is_empty(&self) -> bool {
        self.localized_name.is_none() && self.localized_description.is_none()
    }
}
