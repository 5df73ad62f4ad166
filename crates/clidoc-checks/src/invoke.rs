//! Runs the CLI under test and captures what it prints.

use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::config::HELP_ARG;
use crate::error::Result;
use crate::help::parse_help;

/// Source of raw `help` text for one tool.
#[async_trait]
pub trait HelpSource: Send + Sync {
    async fn help_output(&self) -> Result<String>;
}

/// Spawns `<binary> help` and returns its trimmed stdout followed by its
/// trimmed stderr. The exit status is ignored.
#[derive(Clone, Debug)]
pub struct CliInvoker {
    binary: PathBuf,
    arg: String,
}

impl CliInvoker {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            arg: HELP_ARG.to_string(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

#[async_trait]
impl HelpSource for CliInvoker {
    async fn help_output(&self) -> Result<String> {
        let output = run_captured(&self.binary, &[self.arg.as_str()]).await?;
        Ok(combined_output(&output))
    }
}

/// Runs `binary` with `args` to completion, capturing both streams.
pub async fn run_captured(binary: &Path, args: &[&str]) -> Result<Output> {
    debug!(binary = %binary.display(), ?args, "spawning");
    let output = Command::new(binary)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .await?;
    debug!(
        binary = %binary.display(),
        status = %output.status,
        stdout_bytes = output.stdout.len(),
        stderr_bytes = output.stderr.len(),
        "process exited"
    );
    Ok(output)
}

pub fn combined_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{}{}", stdout.trim(), stderr.trim())
}

/// Fetches a fresh command catalog; nothing is cached between calls.
pub async fn fetch_catalog<S: AsRef<str>>(
    source: &dyn HelpSource,
    headers: &[S],
) -> Result<Vec<String>> {
    let output = source.help_output().await?;
    let catalog = parse_help(&output, headers);
    debug!(commands = catalog.len(), "parsed help catalog");
    Ok(catalog)
}
