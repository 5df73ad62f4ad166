use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = CheckError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{tool} has no command \"{command}\"\nKnown commands: {}", .known.join(" | "))]
    UnknownCommand {
        tool: String,
        command: String,
        known: Vec<String>,
    },
    /// Spawning the CLI under test failed at the OS level.
    #[error(transparent)]
    Spawn(#[from] std::io::Error),
    #[error("empty block")]
    EmptyBlock,
    #[error("no subcommand")]
    NoSubcommand,
    #[error("too many args: {0}")]
    TooManyArgs(usize),
    #[error("{subcommand} seems not a valid subcommand for {executable}{}", detail_suffix(.detail))]
    InvalidSubcommand {
        executable: String,
        subcommand: String,
        /// Trimmed stderr of the failed `--help` run, or stdout when stderr is empty.
        detail: String,
    },
    #[error("read schema {path:?}: {source}")]
    SchemaRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse schema {path:?}: {source}")]
    SchemaParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("parse JSON document: {0}")]
    DocumentParse(serde_json::Error),
    #[error("compile schema: {0}")]
    SchemaCompile(String),
    #[error("JSON validation failed: {}", .0.join("; "))]
    SchemaViolation(Vec<String>),
    #[error("config error: {0}")]
    Config(String),
}

fn detail_suffix(detail: &str) -> String {
    if detail.is_empty() {
        String::new()
    } else {
        format!("\n{detail}")
    }
}
