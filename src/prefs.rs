use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Key under which the last search term is remembered.
pub const SEARCH_KEY: &str = "pokedexSearch";

const PREFS_FILE: &str = "prefs.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct PrefsFile {
    version: u32,

    #[serde(default)]
    values: BTreeMap<String, String>,
}

/// Durable string key-value store backed by `<data-dir>/prefs.json`.
#[derive(Clone, Debug)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    pub fn open(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(PREFS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.values.get(key).cloned())
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut prefs = self.read()?;
        prefs.values.insert(key.to_string(), value.to_string());
        self.write(&prefs)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        let mut prefs = self.read()?;
        if prefs.values.remove(key).is_none() {
            return Ok(());
        }
        self.write(&prefs)
    }

    fn read(&self) -> Result<PrefsFile> {
        if !self.path.exists() {
            return Ok(PrefsFile {
                version: 1,
                values: BTreeMap::new(),
            });
        }
        let bytes =
            fs::read(&self.path).with_context(|| format!("read {}", self.path.display()))?;
        let prefs: PrefsFile = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse {}", self.path.display()))?;
        if prefs.version != 1 {
            anyhow::bail!("unsupported prefs version {}", prefs.version);
        }
        Ok(prefs)
    }

    fn write(&self, prefs: &PrefsFile) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(prefs).context("serialize prefs")?;
        write_atomic(&self.path, &bytes).with_context(|| format!("write {}", self.path.display()))
    }
}

pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/prefs_tests.rs"]
mod tests;
