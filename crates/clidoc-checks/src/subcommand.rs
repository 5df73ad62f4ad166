//! Two-token `<executable> <subcommand>` regions, verified by asking the
//! binary for the subcommand's own `--help`.

use tracing::warn;

use crate::config::ToolSpec;
use crate::error::{CheckError, Result};
use crate::invoke::run_captured;
use crate::region::Region;

/// Splits region text into `(executable, subcommand)`, rejecting any other
/// shape before a process is spawned.
pub fn parse_invocation(text: &str) -> Result<(&str, &str)> {
    let args: Vec<&str> = text.split_whitespace().collect();
    match args.as_slice() {
        [] => Err(CheckError::EmptyBlock),
        [_] => Err(CheckError::NoSubcommand),
        [executable, subcommand] => Ok((*executable, *subcommand)),
        _ => Err(CheckError::TooManyArgs(args.len())),
    }
}

pub async fn verify_subcommand(region: &mut dyn Region, tool: &ToolSpec) -> Result<()> {
    region.name("verify subcommand");
    let (executable, subcommand) = {
        let (executable, subcommand) = parse_invocation(region.text())?;
        (executable.to_string(), subcommand.to_string())
    };
    region.name(&format!("verify \"{subcommand}\""));

    let output = run_captured(&tool.binary, &[subcommand.as_str(), "--help"]).await?;
    if output.status.success() {
        return Ok(());
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    warn!(
        %subcommand,
        status = %output.status,
        stdout = %stdout.trim(),
        stderr = %stderr.trim(),
        "subcommand help failed"
    );
    let detail = if stderr.trim().is_empty() {
        stdout.trim()
    } else {
        stderr.trim()
    };
    Err(CheckError::InvalidSubcommand {
        executable,
        subcommand,
        detail: detail.to_string(),
    })
}
