//! Checks that a documented command exists in the live CLI.

use tracing::debug;

use crate::config::ToolSpec;
use crate::error::{CheckError, Result};
use crate::extract::extract_command;
use crate::invoke::{CliInvoker, HelpSource, fetch_catalog};
use crate::region::Region;

/// Verifies the region's command against `tool`'s current `help` output.
pub async fn verify_command(region: &mut dyn Region, tool: &ToolSpec) -> Result<()> {
    let invoker = CliInvoker::new(&tool.binary);
    verify_command_with(region, tool, &invoker).await
}

/// Same as [`verify_command`] with the help text taken from `source`.
///
/// The region is renamed before the catalog is fetched, so a failing
/// invocation is still reported under the command it was checking.
pub async fn verify_command_with(
    region: &mut dyn Region,
    tool: &ToolSpec,
    source: &dyn HelpSource,
) -> Result<()> {
    let command = extract_command(region.text(), &tool.keyword).to_string();
    region.name(&format!("Valid {} command: {command}", tool.name));

    let known = fetch_catalog(source, tool.headers.as_slice()).await?;
    if known.iter().any(|candidate| *candidate == command) {
        debug!(tool = %tool.name, %command, "documented command exists");
        return Ok(());
    }
    Err(CheckError::UnknownCommand {
        tool: tool.name.clone(),
        command,
        known,
    })
}
