mod config;
mod descriptor;
mod entry;
mod ids;
mod search;

pub use self::config::{DEFAULT_API_BASE, ViewerConfig};
pub use self::descriptor::{
    CardDescriptor, DESCRIPTION_PLACEHOLDER, EMPTY_PLACEHOLDER, OverlayDescriptor, types_label,
};
pub use self::entry::{CatalogEntry, LocalizedInfo};
pub use self::ids::EntryId;
pub use self::search::SearchState;
pub(crate) use self::search::normalize_query;
