//! Tool descriptions and the optional `clidoc.toml` configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CheckError, Result};

pub const CONFIG_FILE: &str = "clidoc.toml";

/// Header literals that introduce a subcommand list in `help` output.
pub const DEFAULT_HEADERS: &[&str] = &["SUBCOMMANDS:", "Commands:"];

/// Argument passed to a tool to make it print its subcommands.
pub const HELP_ARG: &str = "help";

static WORKSPACE_ROOT: Lazy<PathBuf> = Lazy::new(|| {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .ancestors()
        .nth(2)
        .unwrap_or(manifest)
        .to_path_buf()
});

/// Root that tool binaries and the documentation directory are resolved
/// against when no other root is given.
pub fn default_root() -> &'static Path {
    &WORKSPACE_ROOT
}

/// One CLI family whose documented commands are checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Region action that selects this tool, e.g. `contest-command`.
    pub action: String,
    /// Display name used in region labels and diagnostics.
    pub name: String,
    /// Leading word stripped from documented commands.
    pub keyword: String,
    pub binary: PathBuf,
    #[serde(default = "default_headers")]
    pub headers: Vec<String>,
}

impl ToolSpec {
    pub fn new(name: &str, keyword: &str, binary: impl Into<PathBuf>) -> Self {
        Self {
            action: format!("{keyword}-command"),
            name: name.to_string(),
            keyword: keyword.to_string(),
            binary: binary.into(),
            headers: default_headers(),
        }
    }

    pub fn tertestrial(root: &Path) -> Self {
        Self::new("Tertestrial", "tertestrial", debug_binary(root, "tertestrial"))
    }

    pub fn contest(root: &Path) -> Self {
        Self::new("Contest", "contest", debug_binary(root, "contest"))
    }

    fn resolve_against(&mut self, root: &Path) {
        if self.binary.is_relative() {
            self.binary = root.join(&self.binary);
        }
    }
}

fn debug_binary(root: &Path, name: &str) -> PathBuf {
    root.join("target").join("debug").join(name)
}

fn default_headers() -> Vec<String> {
    DEFAULT_HEADERS.iter().map(|h| h.to_string()).collect()
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from("documentation")
}

fn default_schema_file() -> String {
    "schema.json".into()
}

fn default_subcommand_tool() -> String {
    "contest".into()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClidocConfig {
    #[serde(skip)]
    pub root: PathBuf,
    #[serde(default = "default_docs_dir")]
    pub docs_dir: PathBuf,
    #[serde(default = "default_schema_file")]
    pub schema_file: String,
    /// Keyword of the tool whose binary answers `subcommand` regions.
    #[serde(default = "default_subcommand_tool")]
    pub subcommand_tool: String,
    #[serde(default, rename = "tool")]
    pub tools: Vec<ToolSpec>,
}

impl ClidocConfig {
    /// Built-in configuration: Tertestrial and Contest debug builds under `root`.
    pub fn builtin(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            docs_dir: default_docs_dir(),
            schema_file: default_schema_file(),
            subcommand_tool: default_subcommand_tool(),
            tools: vec![ToolSpec::tertestrial(root), ToolSpec::contest(root)],
        }
    }

    /// Load `clidoc.toml` from `root`, falling back to the built-ins when
    /// the file is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            debug!(root = %root.display(), "no {CONFIG_FILE}; using built-in tools");
            return Ok(Self::builtin(root));
        }
        let text = fs::read_to_string(&path)
            .map_err(|err| CheckError::Config(format!("read {}: {err}", path.display())))?;
        Self::from_toml(root, &text)
            .map_err(|err| CheckError::Config(format!("{}: {err}", path.display())))
    }

    pub fn from_toml(root: &Path, text: &str) -> Result<Self, toml::de::Error> {
        let mut config: ClidocConfig = toml::from_str(text)?;
        config.root = root.to_path_buf();
        if config.tools.is_empty() {
            config.tools = Self::builtin(root).tools;
        }
        for tool in &mut config.tools {
            tool.resolve_against(root);
        }
        Ok(config)
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.root.join(&self.docs_dir)
    }

    pub fn schema_path(&self) -> PathBuf {
        self.docs_dir().join(&self.schema_file)
    }

    pub fn tool_for_action(&self, action: &str) -> Option<&ToolSpec> {
        self.tools.iter().find(|tool| tool.action == action)
    }

    pub fn tool_by_keyword(&self, keyword: &str) -> Option<&ToolSpec> {
        self.tools.iter().find(|tool| tool.keyword == keyword)
    }

    pub fn subcommand_tool(&self) -> Result<&ToolSpec> {
        self.tool_by_keyword(&self.subcommand_tool).ok_or_else(|| {
            CheckError::Config(format!(
                "subcommand_tool '{}' matches no configured tool",
                self.subcommand_tool
            ))
        })
    }
}
