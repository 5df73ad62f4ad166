//! Global CLI options and configuration resolution.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use clidoc_checks::ClidocConfig;
use clidoc_checks::config::default_root;

#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Install root that tool binaries and docs resolve against (env: CLIDOC_ROOT)
    #[arg(long, global = true, env = "CLIDOC_ROOT")]
    pub root: Option<PathBuf>,

    /// JSON output
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOpts {
    pub fn root(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| default_root().to_path_buf())
    }

    pub fn load_config(&self) -> Result<ClidocConfig> {
        let root = self.root();
        ClidocConfig::load(&root).with_context(|| format!("load config from {}", root.display()))
    }
}
