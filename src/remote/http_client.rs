use super::*;

impl RemoteClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }

    pub(super) fn list_url(&self) -> String {
        self.url(&format!("/pokemon?limit={}", self.list_limit))
    }

    pub(super) fn detail_url(&self, id: crate::model::EntryId) -> String {
        self.url(&format!("/pokemon/{}", id))
    }

    pub(super) fn species_url(&self, id: crate::model::EntryId) -> String {
        self.url(&format!("/pokemon-species/{}", id))
    }

    /// Single attempt: no retry at any layer.
    pub(super) async fn get(&self, url: &str) -> reqwest::Result<reqwest::Response> {
        self.client.get(url).send().await
    }
}

pub(super) fn ensure_ok(resp: reqwest::Response) -> std::result::Result<reqwest::Response, String> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(format!("status {}", status))
    }
}
