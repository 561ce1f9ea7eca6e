//! Debounced search input and persistence of the last query.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::model::SearchState;
use crate::prefs::{PrefsStore, SEARCH_KEY};

/// Coalesces a burst of inputs: only the last value survives, and only once the
/// quiet window has elapsed since it arrived.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn push(&mut self, value: String, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at)
    }

    /// Returns the settled value once `now` reaches the deadline.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, at)) if now >= *at => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }
}

pub struct SearchController {
    debouncer: Debouncer,
    prefs: PrefsStore,
}

impl SearchController {
    pub fn new(prefs: PrefsStore, debounce: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(debounce),
            prefs,
        }
    }

    pub fn prefs(&self) -> &PrefsStore {
        &self.prefs
    }

    pub fn on_input(&mut self, raw: &str, now: Instant) {
        self.debouncer.push(raw.to_string(), now);
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// When the pending input settles, if there is any.
    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// The raw input that has just settled, if any.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        self.debouncer.poll(now)
    }

    /// Skips the quiet window, e.g. when the user presses Enter.
    pub fn flush(&mut self) -> Option<String> {
        self.debouncer.pending.take().map(|(v, _)| v)
    }

    /// Persists `raw` as typed, then resets `state` to page 1 of the new query.
    /// The state is updated even if persisting fails.
    pub fn commit(&self, raw: &str, state: &mut SearchState) -> Result<()> {
        state.set_query(raw);
        tracing::debug!(query = %state.query(), "search settled");
        self.prefs.set(SEARCH_KEY, raw)?;
        tracing::debug!(path = %self.prefs.path().display(), "search persisted");
        Ok(())
    }

    /// The query saved by a previous session. An empty value counts as none.
    pub fn restore(&self) -> Result<Option<String>> {
        Ok(self
            .prefs
            .get(SEARCH_KEY)?
            .filter(|q| !q.is_empty()))
    }
}

#[cfg(test)]
#[path = "tests/search_tests.rs"]
mod tests;
