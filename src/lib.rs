pub mod catalog;
pub mod localize;
pub mod model;
pub mod overlay;
pub mod pager;
pub mod prefs;
pub mod remote;
pub mod search;
pub mod telemetry;
pub mod tui;
mod tui_shell;
pub mod viewer;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
