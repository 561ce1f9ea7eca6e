//! Wire shapes of the catalog API. Only the fields the viewer reads are modelled.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListResponse {
    pub results: Vec<ListItem>,
}

/// One `results[]` member: the canonical name and the URL of its detail resource.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ListItem {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct DetailRecord {
    pub id: u32,
    pub name: String,

    #[serde(default)]
    pub sprites: Sprites,

    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,

    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

#[derive(Debug, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpeciesRecord {
    #[serde(default)]
    pub names: Vec<SpeciesName>,

    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
}

#[derive(Debug, Deserialize)]
pub struct SpeciesName {
    pub name: String,
    pub language: NamedRef,
}

#[derive(Debug, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedRef,
}
