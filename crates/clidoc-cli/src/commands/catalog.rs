//! `clidoc commands` command.

use anyhow::{Context, Result, anyhow};
use clap::Args;
use clidoc_checks::{CliInvoker, fetch_catalog};

use crate::opts::GlobalOpts;
use crate::output::print_list;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Keyword of the tool to query (default: the subcommand tool)
    #[arg(long)]
    pub tool: Option<String>,
}

pub async fn cmd_catalog(opts: &GlobalOpts, args: &CatalogArgs) -> Result<()> {
    let config = opts.load_config()?;
    let tool = match &args.tool {
        Some(keyword) => config
            .tool_by_keyword(keyword)
            .ok_or_else(|| anyhow!("no configured tool with keyword '{keyword}'"))?,
        None => config.subcommand_tool()?,
    };
    let invoker = CliInvoker::new(&tool.binary);
    let catalog = fetch_catalog(&invoker, tool.headers.as_slice())
        .await
        .with_context(|| format!("run {} help", invoker.binary().display()))?;
    print_list(opts, &catalog)
}
