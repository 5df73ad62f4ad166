//! Checks that run against regions of documentation: documented commands
//! must exist in a live CLI, and embedded JSON must satisfy a schema.

pub mod command;
pub mod config;
pub mod error;
pub mod extract;
pub mod help;
pub mod invoke;
pub mod region;
pub mod schema;
pub mod subcommand;

pub use command::{verify_command, verify_command_with};
pub use config::{ClidocConfig, ToolSpec};
pub use error::{CheckError, Result};
pub use extract::extract_command;
pub use help::{HelpFormat, parse_help};
pub use invoke::{CliInvoker, HelpSource, fetch_catalog};
pub use region::{Region, TextRegion};
pub use schema::verify_json;
pub use subcommand::verify_subcommand;
