//! `clidoc check` command.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use clidoc_checks::{ClidocConfig, ToolSpec, verify_command, verify_json, verify_subcommand};
use futures::future::join_all;
use tracing::debug;

use crate::opts::GlobalOpts;
use crate::output::{RegionReport, print_reports};
use crate::scan::{DocRegion, collect_markdown, scan_markdown};

pub const SUBCOMMAND_ACTION: &str = "subcommand";
pub const VERIFY_JSON_ACTION: &str = "verify-json";

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Markdown files or directories (default: the configured docs directory)
    pub paths: Vec<PathBuf>,
}

enum CheckKind<'a> {
    Command(&'a ToolSpec),
    Subcommand,
    Json,
}

fn classify<'a>(config: &'a ClidocConfig, action: &str) -> Option<CheckKind<'a>> {
    if let Some(tool) = config.tool_for_action(action) {
        return Some(CheckKind::Command(tool));
    }
    match action {
        SUBCOMMAND_ACTION => Some(CheckKind::Subcommand),
        VERIFY_JSON_ACTION => Some(CheckKind::Json),
        _ => None,
    }
}

pub async fn cmd_check(opts: &GlobalOpts, args: &CheckArgs) -> Result<()> {
    let config = opts.load_config()?;
    let paths = if args.paths.is_empty() {
        vec![config.docs_dir()]
    } else {
        args.paths.clone()
    };

    let mut regions = Vec::new();
    for file in collect_markdown(&paths)? {
        let source =
            fs::read_to_string(&file).with_context(|| format!("read {}", file.display()))?;
        regions.extend(scan_markdown(&file, &source));
    }
    debug!(regions = regions.len(), "scanned documentation");

    // Every region is an independent future; nothing is shared between them.
    let reports: Vec<RegionReport> = join_all(
        regions
            .into_iter()
            .map(|region| run_region(&config, region)),
    )
    .await
    .into_iter()
    .flatten()
    .collect();

    print_reports(opts, &reports)?;
    let failed = reports.iter().filter(|r| !r.ok).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} documentation checks failed", reports.len());
    }
    Ok(())
}

async fn run_region(config: &ClidocConfig, mut region: DocRegion) -> Option<RegionReport> {
    let result = match classify(config, &region.action)? {
        CheckKind::Command(tool) => verify_command(&mut region, tool).await,
        CheckKind::Subcommand => match config.subcommand_tool() {
            Ok(tool) => verify_subcommand(&mut region, tool).await,
            Err(err) => Err(err),
        },
        CheckKind::Json => verify_json(&mut region, &config.schema_path()).await,
    };
    Some(RegionReport {
        file: region.file.display().to_string(),
        line: region.line,
        action: region.action,
        name: region.label,
        ok: result.is_ok(),
        error: result.err().map(|err| err.to_string()),
    })
}
