use std::collections::HashSet;

use crate::model::{CatalogEntry, EntryId, normalize_query};

/// The full catalog, in list-endpoint order. Written once at startup, read-only after.
#[derive(Clone, Debug, Default)]
pub struct CatalogStore {
    entries: Vec<CatalogEntry>,
}

impl CatalogStore {
    /// Keeps the first occurrence of a duplicated id.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut seen = HashSet::new();
        let mut out = Vec::with_capacity(entries.len());
        for e in entries {
            if seen.insert(e.id) {
                out.push(e);
            } else {
                tracing::warn!(id = e.id.get(), name = %e.name, "duplicate catalog id dropped");
            }
        }
        Self { entries: out }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn filter(&self, query: &str) -> Vec<CatalogEntry> {
        filter_entries(&self.entries, query)
    }
}

/// Case-insensitive substring match on the name, or exact match on the decimal id.
/// An empty (or all-whitespace) query keeps everything. Order is preserved.
pub fn filter_entries(entries: &[CatalogEntry], query: &str) -> Vec<CatalogEntry> {
    let q = normalize_query(query);
    if q.is_empty() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&q) || e.id.matches_str(&q))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
