use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Root of the catalog API; list, detail and species paths hang off it.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Value sent as `?limit=` on the list request. The whole catalog is fetched once.
    #[serde(default = "default_list_limit")]
    pub list_limit: u32,

    /// Language code matched against `language.name` in species resources.
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Quiet window before a search input is acted on.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Memoise localized names/descriptions for the process lifetime.
    #[serde(default)]
    pub cache_localized: bool,

    /// No timeout when unset; a hung request stalls only its own caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            list_limit: default_list_limit(),
            locale: default_locale(),
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            cache_localized: false,
            request_timeout_secs: None,
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.page_size == 0 {
            anyhow::bail!("page_size must be at least 1");
        }
        if self.list_limit == 0 {
            anyhow::bail!("list_limit must be at least 1");
        }
        if self.locale.trim().is_empty() {
            anyhow::bail!("locale must not be empty");
        }
        let base = self.api_base.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            anyhow::bail!("api_base must be an http(s) URL (got {:?})", self.api_base);
        }
        Ok(())
    }

    pub fn api_root(&self) -> &str {
        self.api_base.trim().trim_end_matches('/')
    }

    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_list_limit() -> u32 {
    1025
}

fn default_locale() -> String {
    "fr".to_string()
}

fn default_page_size() -> usize {
    20
}

fn default_debounce_ms() -> u64 {
    150
}

impl ViewerConfig {
    /// Reads `path` if it exists; a missing file means all defaults.
    pub fn load_or_default(path: &std::path::Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        if !path.exists() {
            return Ok(Self::default());
        }
        let bytes =
            std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))
    }
}
