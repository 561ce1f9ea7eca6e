use anyhow::{Context, Result};

use crate::model::ViewerConfig;

mod catalog;
mod error;
mod http_client;
mod species;
mod types;

pub use self::catalog::{load_catalog, normalize};
pub use self::error::{CatalogError, LocalizationError};
pub use self::species::{clean_flavor_text, find_localized_description, find_localized_name};
pub use self::types::*;

/// Read-only client for the catalog API. Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct RemoteClient {
    api_root: String,
    list_limit: u32,
    client: reqwest::Client,
}

impl RemoteClient {
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent("pokedex");
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build().context("build reqwest client")?;
        Ok(Self {
            api_root: config.api_root().to_string(),
            list_limit: config.list_limit,
            client,
        })
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }
}

#[cfg(test)]
#[path = "tests/remote/normalize_tests.rs"]
mod normalize_tests;
