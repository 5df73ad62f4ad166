//! Extracts the subcommand catalog from a CLI's `help` output.
//!
//! Three layouts are recognised:
//! - a `SUBCOMMANDS:` header followed by one command per line,
//! - a `Commands:` header with the same per-line shape,
//! - `- <name>: <description>` bullet lines anywhere in the output.
//!
//! The layout is resolved once per input by [`HelpFormat::detect`] and the
//! matching strategy is applied by [`HelpFormat::parse`].

use once_cell::sync::Lazy;
use regex::Regex;

/// First word of a line, tolerating leading whitespace. Hyphens are allowed
/// inside the word so kebab-case commands survive intact.
static FIRST_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\w[\w-]*)").expect("first word pattern"));

static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*-\s+(\w[\w-]*):").expect("bullet pattern"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HelpFormat {
    /// Commands follow the first line starting with this literal.
    Header(String),
    /// No header present; every `- <name>:` line is a command.
    Bullets,
}

impl HelpFormat {
    /// Picks the layout of `output`: the first line that starts with one of
    /// `headers` selects the header layout, otherwise bullets.
    pub fn detect<S: AsRef<str>>(output: &str, headers: &[S]) -> Self {
        output
            .lines()
            .find_map(|line| matching_header(line, headers))
            .map(|header| HelpFormat::Header(header.to_string()))
            .unwrap_or(HelpFormat::Bullets)
    }

    pub fn parse(&self, output: &str) -> Vec<String> {
        match self {
            HelpFormat::Header(header) => parse_after_header(output, header),
            HelpFormat::Bullets => parse_bullets(output),
        }
    }
}

/// Detects the layout of `output` and returns its commands in help order.
pub fn parse_help<S: AsRef<str>>(output: &str, headers: &[S]) -> Vec<String> {
    HelpFormat::detect(output, headers).parse(output)
}

fn matching_header<'a, S: AsRef<str>>(line: &str, headers: &'a [S]) -> Option<&'a str> {
    headers
        .iter()
        .map(|header| header.as_ref())
        .find(|header| !header.is_empty() && line.starts_with(header))
}

fn parse_after_header(output: &str, header: &str) -> Vec<String> {
    let mut in_commands = false;
    let mut commands = Vec::new();
    for line in output.lines() {
        if line.starts_with(header) {
            in_commands = true;
            continue;
        }
        if !in_commands {
            continue;
        }
        if let Some(word) = FIRST_WORD.captures(line).and_then(|caps| caps.get(1)) {
            commands.push(word.as_str().to_string());
        }
    }
    commands
}

fn parse_bullets(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| BULLET.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|word| word.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_HEADERS;

    #[test]
    fn subcommands_header_layout() {
        let output = "SUBCOMMANDS:\n  build\n  test\n";
        assert_eq!(parse_help(output, DEFAULT_HEADERS), vec!["build", "test"]);
    }

    #[test]
    fn bullet_layout() {
        let output = "- init: initialize\n- sync: synchronize\n";
        assert_eq!(
            HelpFormat::detect(output, DEFAULT_HEADERS),
            HelpFormat::Bullets
        );
        assert_eq!(parse_help(output, DEFAULT_HEADERS), vec!["init", "sync"]);
    }

    #[test]
    fn clap_commands_layout() {
        let output = "\
Run tests for files you edit

Usage: contest [COMMAND]

Commands:
  debug  Print the received triggers from the pipe
  run    Run the given client-side trigger and exit
  init   Create an example configuration file
  start  Execute the received triggers from the pipe
  help   Print this message or the help of the given subcommand(s)

Options:
  -h, --help     Print help
  -V, --version  Print version";
        assert_eq!(
            HelpFormat::detect(output, DEFAULT_HEADERS),
            HelpFormat::Header("Commands:".into())
        );
        assert_eq!(
            parse_help(output, DEFAULT_HEADERS),
            vec!["debug", "run", "init", "start", "help", "Options"]
        );
    }

    #[test]
    fn clap2_subcommands_layout() {
        let output = "\
tertestrial 0.1.0
runs tests for files you edit

USAGE:
    tertestrial [SUBCOMMAND]

FLAGS:
    -h, --help       Prints help information
    -V, --version    Prints version information

SUBCOMMANDS:
    debug    print the received commands from the pipe without running them
    help     Prints this message or the help of the given subcommand(s)
    run      runs the given command manually
    setup    create a config file";
        assert_eq!(
            parse_help(output, DEFAULT_HEADERS),
            vec!["debug", "help", "run", "setup"]
        );
    }

    #[test]
    fn crlf_lines_parse_like_lf() {
        let output = "Commands:\r\n  build  Build it\r\n  test   Test it\r\n";
        assert_eq!(parse_help(output, DEFAULT_HEADERS), vec!["build", "test"]);
    }

    #[test]
    fn blank_and_symbol_lines_after_header_are_skipped() {
        let output = "Commands:\n\n  build\n   \n  -h, --help\n  trace-find  Find\n";
        assert_eq!(
            parse_help(output, DEFAULT_HEADERS),
            vec!["build", "trace-find"]
        );
    }

    #[test]
    fn header_without_commands_is_empty() {
        assert!(parse_help("usage: tool\nSUBCOMMANDS:", DEFAULT_HEADERS).is_empty());
        assert!(parse_help("Commands:\n", DEFAULT_HEADERS).is_empty());
    }

    #[test]
    fn unrecognised_output_is_empty() {
        let output = "tool 1.0\nusage: tool [options]\n  --verbose  talk more\n";
        assert!(parse_help(output, DEFAULT_HEADERS).is_empty());
        assert!(parse_help("", DEFAULT_HEADERS).is_empty());
    }

    #[test]
    fn lines_before_header_do_not_contribute() {
        let output = "intro words\n- stray: bullet\nSUBCOMMANDS:\n  real\n";
        assert_eq!(parse_help(output, DEFAULT_HEADERS), vec!["real"]);
    }

    #[test]
    fn bullets_are_collected_across_the_whole_output() {
        let output = "Tool\n- first: one\nsome prose\n\nMore:\n  - second: two\n";
        assert_eq!(
            parse_help(output, DEFAULT_HEADERS),
            vec!["first", "second"]
        );
    }

    #[test]
    fn repeated_commands_are_kept_in_order() {
        let output = "Commands:\n  run\n  build\n  run\n";
        assert_eq!(
            parse_help(output, DEFAULT_HEADERS),
            vec!["run", "build", "run"]
        );
    }

    #[test]
    fn custom_header_literal() {
        let output = "Available tasks:\n  lint\n  fmt\n";
        assert_eq!(
            parse_help(output, &["Available tasks:"]),
            vec!["lint", "fmt"]
        );
        assert!(parse_help(output, DEFAULT_HEADERS).is_empty());
    }

    #[test]
    fn repeated_header_lines_never_contribute() {
        let output = "SUBCOMMANDS:\n  one\nSUBCOMMANDS:\n  two\n";
        assert_eq!(parse_help(output, DEFAULT_HEADERS), vec!["one", "two"]);
    }
}
