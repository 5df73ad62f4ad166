mod commands;
mod opts;
mod output;
mod scan;

use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::catalog::CatalogArgs;
use commands::check::CheckArgs;
use commands::verify_json::VerifyJsonArgs;
use opts::GlobalOpts;

#[derive(Parser, Debug)]
#[command(
    name = "clidoc",
    version,
    about = "Check documentation against a live CLI and a JSON schema"
)]
struct Cli {
    #[command(flatten)]
    opts: GlobalOpts,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every check region found in Markdown documentation
    Check(CheckArgs),

    /// Print the commands a tool currently advertises in its help output
    Commands(CatalogArgs),

    /// Validate a JSON file against the documentation schema
    VerifyJson(VerifyJsonArgs),
}

#[tokio::main]
async fn main() {
    setup_logging();
    if let Err(err) = run().await {
        eprintln!("error: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let opts = &cli.opts;
    match &cli.command {
        Command::Check(args) => commands::check::cmd_check(opts, args).await,
        Command::Commands(args) => commands::catalog::cmd_catalog(opts, args).await,
        Command::VerifyJson(args) => commands::verify_json::cmd_verify_json(opts, args).await,
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}
