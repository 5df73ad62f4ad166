//! `clidoc verify-json` command.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use clidoc_checks::{TextRegion, verify_json};

use crate::opts::GlobalOpts;

#[derive(Args, Debug)]
pub struct VerifyJsonArgs {
    /// JSON document to validate
    pub file: PathBuf,

    /// Schema to validate against (default: <docs_dir>/<schema_file>)
    #[arg(long)]
    pub schema: Option<PathBuf>,
}

pub async fn cmd_verify_json(opts: &GlobalOpts, args: &VerifyJsonArgs) -> Result<()> {
    let schema = match &args.schema {
        Some(path) => path.clone(),
        None => opts.load_config()?.schema_path(),
    };
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("read {}", args.file.display()))?;
    let mut region = TextRegion::new(text);
    verify_json(&mut region, &schema)
        .await
        .with_context(|| format!("{} does not conform", args.file.display()))?;
    println!("{}: ok", args.file.display());
    Ok(())
}
