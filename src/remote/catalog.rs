use tokio::task::JoinSet;

use super::http_client::ensure_ok;
use super::*;
use crate::catalog::CatalogStore;
use crate::model::{CatalogEntry, EntryId};

impl RemoteClient {
    pub async fn fetch_catalog_list(&self) -> std::result::Result<Vec<ListItem>, CatalogError> {
        let url = self.list_url();
        let resp = self.get(&url).await.map_err(CatalogError::list)?;
        let resp = ensure_ok(resp).map_err(CatalogError::list)?;
        let body: ListResponse = resp.json().await.map_err(CatalogError::list)?;
        Ok(body.results)
    }

    pub async fn fetch_entry_detail(
        &self,
        item: &ListItem,
    ) -> std::result::Result<DetailRecord, CatalogError> {
        self.fetch_detail_at(&item.name, &item.url).await
    }

    /// Detail lookup by id, bypassing the list. Used when only one entry is needed.
    pub async fn fetch_entry_by_id(
        &self,
        id: EntryId,
    ) -> std::result::Result<CatalogEntry, CatalogError> {
        let url = self.detail_url(id);
        let raw = self.fetch_detail_at(&id.to_string(), &url).await?;
        Ok(normalize(raw))
    }

    async fn fetch_detail_at(
        &self,
        name: &str,
        url: &str,
    ) -> std::result::Result<DetailRecord, CatalogError> {
        let resp = self
            .get(url)
            .await
            .map_err(|e| CatalogError::detail(name, e))?;
        let resp = ensure_ok(resp).map_err(|e| CatalogError::detail(name, e))?;
        resp.json()
            .await
            .map_err(|e| CatalogError::detail(name, e))
    }
}

/// Prefers the official artwork, then the default sprite, then nothing.
pub fn normalize(raw: DetailRecord) -> CatalogEntry {
    let artwork = raw
        .sprites
        .other
        .and_then(|o| o.official_artwork)
        .and_then(|a| a.front_default)
        .filter(|s| !s.is_empty());
    let sprite_url = artwork
        .or(raw.sprites.front_default.filter(|s| !s.is_empty()))
        .unwrap_or_default();

    CatalogEntry {
        id: EntryId(raw.id),
        name: raw.name,
        sprite_url,
        types: raw.types.into_iter().map(|t| t.kind.name).collect(),
    }
}

/// Fetches the list, then every detail concurrently. The first failed detail aborts
/// the remaining requests and fails the whole load.
pub async fn load_catalog(
    client: &RemoteClient,
) -> std::result::Result<CatalogStore, CatalogError> {
    let items = client.fetch_catalog_list().await.inspect_err(|err| {
        tracing::warn!(error = %err, "catalog list fetch failed");
    })?;
    tracing::info!(count = items.len(), "catalog list fetched");

    let mut tasks = JoinSet::new();
    for (idx, item) in items.iter().cloned().enumerate() {
        let client = client.clone();
        tasks.spawn(async move { (idx, client.fetch_entry_detail(&item).await) });
    }

    let mut slots: Vec<Option<CatalogEntry>> = vec![None; items.len()];
    while let Some(joined) = tasks.join_next().await {
        let (idx, res) = match joined {
            Ok(v) => v,
            Err(err) => {
                tasks.abort_all();
                return Err(CatalogError::detail("unknown entry", err));
            }
        };
        match res {
            Ok(raw) => slots[idx] = Some(normalize(raw)),
            Err(err) => {
                tasks.abort_all();
                tracing::warn!(error = %err, "detail fetch failed; aborting catalog load");
                return Err(err);
            }
        }
    }

    let entries: Vec<CatalogEntry> = slots.into_iter().flatten().collect();
    tracing::info!(count = entries.len(), "catalog hydrated");
    Ok(CatalogStore::new(entries))
}
