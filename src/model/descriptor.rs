//! Declarative render output. The presentation layer draws these and nothing else.

use serde::Serialize;

use super::CatalogEntry;

pub const EMPTY_PLACEHOLDER: &str = "No Pokémon found.";
pub const DESCRIPTION_PLACEHOLDER: &str = "Description unavailable.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardDescriptor {
    pub title: String,
    pub id_label: String,
    pub types_label: String,
    pub image_url: String,
}

impl CardDescriptor {
    /// `localized_name` wins over the canonical name; either way the title is uppercased.
    pub fn new(entry: &CatalogEntry, localized_name: Option<&str>) -> Self {
        Self {
            title: display_title(entry, localized_name),
            id_label: entry.id.label(),
            types_label: types_label(&entry.types),
            image_url: entry.sprite_url.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OverlayDescriptor {
    pub title: String,
    pub id_label: String,
    pub types_label: String,
    pub description: String,
    pub image_url: String,
}

impl OverlayDescriptor {
    pub fn new(
        entry: &CatalogEntry,
        localized_name: Option<&str>,
        localized_description: Option<&str>,
    ) -> Self {
        Self {
            title: display_title(entry, localized_name),
            id_label: format!("ID: {}", entry.id.label()),
            types_label: types_label(&entry.types),
            description: localized_description
                .unwrap_or(DESCRIPTION_PLACEHOLDER)
                .to_string(),
            image_url: entry.sprite_url.clone(),
        }
    }
}

pub fn types_label(types: &[String]) -> String {
    format!("Types: {}", types.join(", "))
}

fn display_title(entry: &CatalogEntry, localized_name: Option<&str>) -> String {
    localized_name
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(&entry.name)
        .to_uppercase()
}
