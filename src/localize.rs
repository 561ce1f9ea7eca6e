//! On-demand localized names and descriptions.
//!
//! Lookups are best effort. A failed or missing translation is logged and reported
//! as `None`, so callers fall back to canonical text and never see an error.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use crate::model::{CatalogEntry, EntryId, LocalizedInfo};
use crate::remote::LocalizationError;

/// Where localized text comes from. `RemoteClient` is the production source.
pub trait LocalizationSource {
    fn localized_name(
        &self,
        id: EntryId,
        locale: &str,
    ) -> impl Future<Output = Result<Option<String>, LocalizationError>>;

    fn localized_description(
        &self,
        id: EntryId,
        locale: &str,
    ) -> impl Future<Output = Result<Option<String>, LocalizationError>>;
}

#[derive(Default)]
struct LocalizedCache {
    names: HashMap<EntryId, Option<String>>,
    descriptions: HashMap<EntryId, Option<String>>,
}

pub struct Enricher<S> {
    source: S,
    locale: String,
    // Successful lookups only, including "no translation". Failures are retried on the
    // next request.
    cache: Option<Mutex<LocalizedCache>>,
}

impl<S: LocalizationSource> Enricher<S> {
    pub fn new(source: S, locale: &str) -> Self {
        Self {
            source,
            locale: locale.to_string(),
            cache: None,
        }
    }

    pub fn with_cache(mut self) -> Self {
        self.cache = Some(Mutex::new(LocalizedCache::default()));
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn localized_name(&self, entry: &CatalogEntry) -> Option<String> {
        if let Some(hit) = self.cached(entry.id, |c| &c.names) {
            return hit;
        }
        match self.source.localized_name(entry.id, &self.locale).await {
            Ok(name) => {
                self.remember(entry.id, name.clone(), |c| &mut c.names);
                name
            }
            Err(err) => {
                tracing::debug!(
                    id = entry.id.get(),
                    name = %entry.name,
                    locale = %self.locale,
                    error = %err,
                    "localized name unavailable"
                );
                None
            }
        }
    }

    pub async fn localized_description(&self, entry: &CatalogEntry) -> Option<String> {
        if let Some(hit) = self.cached(entry.id, |c| &c.descriptions) {
            return hit;
        }
        match self
            .source
            .localized_description(entry.id, &self.locale)
            .await
        {
            Ok(desc) => {
                self.remember(entry.id, desc.clone(), |c| &mut c.descriptions);
                desc
            }
            Err(err) => {
                tracing::debug!(
                    id = entry.id.get(),
                    name = %entry.name,
                    locale = %self.locale,
                    error = %err,
                    "localized description unavailable"
                );
                None
            }
        }
    }

    /// Name and description as two independent lookups.
    pub async fn localize(&self, entry: &CatalogEntry) -> LocalizedInfo {
        let localized_name = self.localized_name(entry).await;
        let localized_description = self.localized_description(entry).await;
        LocalizedInfo {
            localized_name,
            localized_description,
        }
    }

    fn cached(
        &self,
        id: EntryId,
        pick: impl Fn(&LocalizedCache) -> &HashMap<EntryId, Option<String>>,
    ) -> Option<Option<String>> {
        let cache = self.cache.as_ref()?;
        let guard = cache.lock().ok()?;
        pick(&guard).get(&id).cloned()
    }

    fn remember(
        &self,
        id: EntryId,
        value: Option<String>,
        pick: impl Fn(&mut LocalizedCache) -> &mut HashMap<EntryId, Option<String>>,
    ) {
        let Some(cache) = self.cache.as_ref() else {
            return;
        };
        if let Ok(mut guard) = cache.lock() {
            pick(&mut guard).insert(id, value);
        }
    }
}

#[cfg(test)]
#[path = "tests/localize_tests.rs"]
mod tests;
