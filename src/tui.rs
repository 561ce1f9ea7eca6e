use std::path::PathBuf;

use anyhow::Result;

use crate::model::ViewerConfig;

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    pub config: ViewerConfig,
    pub data_dir: PathBuf,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
