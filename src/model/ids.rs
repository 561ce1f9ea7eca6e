use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the catalog API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u32);

impl EntryId {
    pub fn get(self) -> u32 {
        self.0
    }

    /// `#025`, `#1025`.
    pub fn label(self) -> String {
        format!("#{:03}", self.0)
    }

    /// Exact match against the decimal rendering, so `"25"` matches 25 but `"025"` does not.
    pub fn matches_str(self, s: &str) -> bool {
        self.0.to_string() == s
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
