use anyhow::Result;

mod app;
mod event_loop;
mod input;
mod render;
mod status;

use app::{App, Phase};
use input::Input;
use status::{StatusKind, StatusLine};

pub fn run_with_options(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
