/// Current search query plus the "load more" cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    page: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

impl SearchState {
    /// Normalized query: trimmed and lowercased. Empty means no filter.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Stores the normalized query and resets the cursor to page 1.
    /// Returns whether the normalized query changed.
    pub fn set_query(&mut self, raw: &str) -> bool {
        let q = normalize_query(raw);
        let changed = q != self.query;
        self.query = q;
        self.page = 1;
        changed
    }

    pub fn advance_page(&mut self) -> usize {
        self.page += 1;
        self.page
    }
}

pub(crate) fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}
