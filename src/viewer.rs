//! Session state for one browsing session and the operations the front-ends drive.
//!
//! The catalog is owned here and never written after construction. The query and the
//! page cursor are owned by the search/pagination side and mutated only through the
//! methods below, one at a time.

use std::time::Instant;

use crate::catalog::CatalogStore;
use crate::localize::{Enricher, LocalizationSource};
use crate::model::{
    CardDescriptor, CatalogEntry, LocalizedInfo, OverlayDescriptor, SearchState, ViewerConfig,
};
use crate::overlay::{DetailOverlay, OverlayClick};
use crate::pager::{Pager, RenderUpdate};
use crate::prefs::PrefsStore;
use crate::search::SearchController;

pub struct Viewer<S> {
    store: CatalogStore,
    search: SearchState,
    search_ctl: SearchController,
    pager: Pager,
    enricher: Enricher<S>,
    overlay: DetailOverlay,

    // Raw text of the search field, as typed.
    input: String,

    // Last non-fatal problem worth showing (e.g. prefs could not be written).
    note: Option<String>,
}

impl<S: LocalizationSource> Viewer<S> {
    pub fn new(
        store: CatalogStore,
        enricher: Enricher<S>,
        search_ctl: SearchController,
        page_size: usize,
    ) -> Self {
        Self {
            store,
            search: SearchState::default(),
            search_ctl,
            pager: Pager::new(page_size),
            enricher,
            overlay: DetailOverlay::default(),
            input: String::new(),
            note: None,
        }
    }

    pub fn from_config(
        store: CatalogStore,
        source: S,
        prefs: PrefsStore,
        config: &ViewerConfig,
    ) -> Self {
        let mut enricher = Enricher::new(source, &config.locale);
        if config.cache_localized {
            enricher = enricher.with_cache();
        }
        let search_ctl = SearchController::new(prefs, config.debounce());
        Self::new(store, enricher, search_ctl, config.page_size)
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn overlay(&self) -> &DetailOverlay {
        &self.overlay
    }

    pub fn enricher(&self) -> &Enricher<S> {
        &self.enricher
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn take_note(&mut self) -> Option<String> {
        self.note.take()
    }

    /// Applies a previously saved query and schedules page 1. Nothing is rendered yet.
    pub fn restore(&mut self) -> RenderUpdate {
        match self.search_ctl.restore() {
            Ok(Some(saved)) => {
                tracing::debug!(query = %saved, "restoring saved search");
                self.input = saved;
                self.search.set_query(&self.input);
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %format!("{:#}", err), "could not read saved search");
                self.note = Some(format!("saved search ignored: {:#}", err));
            }
        }
        self.begin_first_page()
    }

    /// First render. A previously saved query is applied before any input arrives.
    pub async fn start(&mut self) -> RenderUpdate {
        let mut update = self.restore();
        update.appended = self.render_pending().await;
        update
    }

    /// Records a keystroke's worth of input. Nothing is filtered until it settles.
    pub fn on_input(&mut self, raw: &str, now: Instant) {
        self.input = raw.to_string();
        self.search_ctl.on_input(raw, now);
    }

    pub fn is_search_pending(&self) -> bool {
        self.search_ctl.is_pending()
    }

    pub fn search_deadline(&self) -> Option<Instant> {
        self.search_ctl.deadline()
    }

    /// Commits the pending input once its quiet window has elapsed.
    pub fn settle_input(&mut self, now: Instant) -> Option<RenderUpdate> {
        let settled = self.search_ctl.poll(now)?;
        Some(self.set_query(&settled))
    }

    /// Commits pending input immediately.
    pub fn flush_input(&mut self) -> Option<RenderUpdate> {
        let settled = self.search_ctl.flush()?;
        Some(self.set_query(&settled))
    }

    /// Persists `raw`, resets to page 1 and schedules the filtered catalog.
    pub fn set_query(&mut self, raw: &str) -> RenderUpdate {
        self.input = raw.to_string();
        if let Err(err) = self.search_ctl.commit(raw, &mut self.search) {
            tracing::warn!(error = %format!("{:#}", err), "could not persist search");
            self.note = Some(format!("search not saved: {:#}", err));
        }
        self.begin_first_page()
    }

    /// `set_query` followed by rendering the whole page.
    pub async fn apply_query(&mut self, raw: &str) -> RenderUpdate {
        let mut update = self.set_query(raw);
        update.appended = self.render_pending().await;
        update
    }

    pub fn request_more(&mut self) -> Option<RenderUpdate> {
        self.pager.begin_load_more(&mut self.search)
    }

    pub async fn load_more(&mut self) -> Option<RenderUpdate> {
        let mut update = self.request_more()?;
        update.appended = self.render_pending().await;
        Some(update)
    }

    pub fn is_rendering(&self) -> bool {
        self.pager.is_rendering()
    }

    pub fn next_to_render(&self) -> Option<&CatalogEntry> {
        self.pager.next_pending()
    }

    /// Stores a name lookup that was started for `entry`. Ignored if the schedule has
    /// moved on since.
    pub fn complete_render(
        &mut self,
        entry: &CatalogEntry,
        localized_name: Option<&str>,
    ) -> Option<CardDescriptor> {
        self.pager.complete_next(entry, localized_name)
    }

    pub async fn render_pending(&mut self) -> Vec<CardDescriptor> {
        self.pager.finish(&self.enricher).await
    }

    /// Opens the overlay with text that has already been looked up.
    pub fn show_overlay(&mut self, entry: &CatalogEntry, info: &LocalizedInfo) -> OverlayDescriptor {
        self.overlay.show(entry, info)
    }

    pub fn close_overlay(&mut self) {
        self.overlay.close();
    }

    pub fn click_overlay(&mut self, target: OverlayClick) {
        self.overlay.click(target);
    }

    fn begin_first_page(&mut self) -> RenderUpdate {
        let list = self.store.filter(self.search.query());
        self.pager.begin_page(&list, self.search.page())
    }
}

#[cfg(test)]
#[path = "tests/viewer_tests.rs"]
mod tests;
