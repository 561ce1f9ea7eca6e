//! Page-windowed rendering with "load more" semantics.
//!
//! Page 1 replaces whatever was shown; later pages only append their own window, so an
//! item is enriched and rendered at most once per reset. Scheduling a page and rendering
//! its cards are separate steps: a front-end can draw and read input between cards.

use serde::Serialize;

use crate::localize::{Enricher, LocalizationSource};
use crate::model::{CardDescriptor, CatalogEntry, EMPTY_PLACEHOLDER, SearchState};

/// What one page request changed. `reset` means existing output must be cleared
/// before `appended` is drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderUpdate {
    pub reset: bool,
    pub appended: Vec<CardDescriptor>,
    pub placeholder: Option<String>,
    pub load_more: bool,
}

#[derive(Debug)]
pub struct Pager {
    page_size: usize,
    visible: Vec<CatalogEntry>,

    // Always a prefix of `visible`: card `i` describes `visible[i]`.
    cards: Vec<CardDescriptor>,

    // Cards `cards.len()..target` are scheduled but not rendered yet.
    target: usize,
    load_more: bool,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            visible: Vec::new(),
            cards: Vec::new(),
            target: 0,
            load_more: false,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Everything rendered since the last reset, in display order.
    pub fn cards(&self) -> &[CardDescriptor] {
        &self.cards
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn has_load_more(&self) -> bool {
        self.load_more
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        if self.visible.is_empty() {
            Some(EMPTY_PLACEHOLDER)
        } else {
            None
        }
    }

    pub fn is_rendering(&self) -> bool {
        self.cards.len() < self.target
    }

    pub fn pending_len(&self) -> usize {
        self.target.saturating_sub(self.cards.len())
    }

    /// The entry whose card is due next.
    pub fn next_pending(&self) -> Option<&CatalogEntry> {
        if self.is_rendering() {
            self.visible.get(self.cards.len())
        } else {
            None
        }
    }

    /// The entry behind the card at `idx`, if that card has been rendered.
    pub fn entry_at(&self, idx: usize) -> Option<&CatalogEntry> {
        if idx < self.cards.len() {
            self.visible.get(idx)
        } else {
            None
        }
    }

    /// Schedules the window `[(page-1)*size, page*size)` of `list`. Page 1, or a list other
    /// than the one on screen, clears previous output; a later page of the same list
    /// appends. Items already rendered are never rendered again.
    pub fn begin_page(&mut self, list: &[CatalogEntry], page: usize) -> RenderUpdate {
        let page = page.max(1);
        let reset = page == 1 || self.visible.as_slice() != list;
        if reset {
            self.cards.clear();
            self.visible = list.to_vec();
        }
        self.schedule(page, reset)
    }

    /// Advances the cursor and schedules the next window. `None` when there is nothing
    /// more to show.
    pub fn begin_load_more(&mut self, state: &mut SearchState) -> Option<RenderUpdate> {
        if !self.load_more {
            return None;
        }
        let page = state.advance_page();
        Some(self.schedule(page, false))
    }

    /// Records the card for `entry` if it is still the one due. A lookup that finished
    /// after the schedule changed is dropped.
    pub fn complete_next(
        &mut self,
        entry: &CatalogEntry,
        localized_name: Option<&str>,
    ) -> Option<CardDescriptor> {
        if self.next_pending() != Some(entry) {
            return None;
        }
        let card = CardDescriptor::new(entry, localized_name);
        self.cards.push(card.clone());
        if !self.is_rendering() {
            tracing::debug!(
                rendered = self.cards.len(),
                total = self.visible.len(),
                load_more = self.load_more,
                "page rendered"
            );
        }
        Some(card)
    }

    /// Enriches and renders one pending card.
    pub async fn render_next<S: LocalizationSource>(
        &mut self,
        enricher: &Enricher<S>,
    ) -> Option<CardDescriptor> {
        let entry = self.next_pending()?.clone();
        let localized = enricher.localized_name(&entry).await;
        self.complete_next(&entry, localized.as_deref())
    }

    /// Renders every pending card, one lookup at a time, in display order.
    pub async fn finish<S: LocalizationSource>(
        &mut self,
        enricher: &Enricher<S>,
    ) -> Vec<CardDescriptor> {
        let mut appended = Vec::with_capacity(self.pending_len());
        while let Some(card) = self.render_next(enricher).await {
            appended.push(card);
        }
        appended
    }

    fn schedule(&mut self, page: usize, reset: bool) -> RenderUpdate {
        let len = self.visible.len();
        let window_end = page.saturating_mul(self.page_size);
        self.target = window_end.min(len);
        self.load_more = window_end < len;
        RenderUpdate {
            reset,
            appended: Vec::new(),
            placeholder: (len == 0).then(|| EMPTY_PLACEHOLDER.to_string()),
            load_more: self.load_more,
        }
    }
}

#[cfg(test)]
#[path = "tests/pager_tests.rs"]
mod tests;
