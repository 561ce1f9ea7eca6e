use std::fmt;

/// Startup failures. Either one is fatal: no partial catalog is ever built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    ListUnavailable { reason: String },
    DetailUnavailable { name: String, reason: String },
}

impl CatalogError {
    pub fn list(reason: impl fmt::Display) -> Self {
        CatalogError::ListUnavailable {
            reason: reason.to_string(),
        }
    }

    pub fn detail(name: &str, reason: impl fmt::Display) -> Self {
        CatalogError::DetailUnavailable {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Short message shown to the user; the reason is left to the log.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::ListUnavailable { .. } => "unable to fetch the catalog list".to_string(),
            CatalogError::DetailUnavailable { name, .. } => {
                format!("failed to fetch details for {}", name)
            }
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::ListUnavailable { reason } => {
                write!(f, "catalog list unavailable: {}", reason)
            }
            CatalogError::DetailUnavailable { name, reason } => {
                write!(f, "details unavailable for {}: {}", name, reason)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Never leaves the localization layer; callers see absent fields instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalizationError {
    Request(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for LocalizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalizationError::Request(msg) => write!(f, "species request failed: {}", msg),
            LocalizationError::Status(code) => write!(f, "species request returned {}", code),
            LocalizationError::Decode(msg) => write!(f, "species response not understood: {}", msg),
        }
    }
}

impl std::error::Error for LocalizationError {}
