//! Finds check regions in Markdown files.
//!
//! A region is an HTML element carrying a `type` attribute, e.g.
//! `<code type="contest-command">contest run</code>`. The attribute names the
//! check; the element's text content is the region text. Markup shown inside
//! fenced, indented or inline code is example text, not a region.

use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clidoc_checks::Region;
use once_cell::sync::Lazy;
use pulldown_cmark::{Event, Parser, Tag};
use regex::Regex;
use tracing::warn;
use walkdir::WalkDir;

static OPEN_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<([A-Za-z][A-Za-z0-9]*)\s[^>]*?\btype="([^"]+)"[^>]*>"#).expect("open tag pattern")
});

static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocRegion {
    pub file: PathBuf,
    pub line: usize,
    pub action: String,
    pub text: String,
    pub label: String,
}

impl Region for DocRegion {
    fn text(&self) -> &str {
        &self.text
    }

    fn name(&mut self, label: &str) {
        self.label = label.to_string();
    }
}

pub fn scan_markdown(file: &Path, source: &str) -> Vec<DocRegion> {
    let code = code_spans(source);
    let mut regions = Vec::new();
    for caps in OPEN_TAG.captures_iter(source) {
        let (Some(open), Some(tag), Some(action)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        if code.iter().any(|span| span.contains(&open.start())) {
            continue;
        }
        let close = format!("</{}>", tag.as_str());
        let body = &source[open.end()..];
        let Some(len) = body.find(&close) else {
            warn!(
                file = %file.display(),
                line = line_of(source, open.start()),
                "unclosed <{}> region",
                tag.as_str()
            );
            continue;
        };
        let inner = ANY_TAG.replace_all(&body[..len], "");
        regions.push(DocRegion {
            file: file.to_path_buf(),
            line: line_of(source, open.start()),
            action: action.as_str().to_string(),
            text: decode_entities(&inner),
            label: action.as_str().to_string(),
        });
    }
    regions
}

/// Byte ranges of code blocks and inline code spans in `source`.
fn code_spans(source: &str) -> Vec<Range<usize>> {
    Parser::new(source)
        .into_offset_iter()
        .filter_map(|(event, range)| match event {
            Event::Start(Tag::CodeBlock(_)) | Event::Code(_) => Some(range),
            _ => None,
        })
        .collect()
}

/// Markdown files under `paths`, sorted; plain files are taken as given.
pub fn collect_markdown(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        for entry in WalkDir::new(path).into_iter().filter_entry(|e| !should_skip(e)) {
            let entry = entry.with_context(|| format!("walk {}", path.display()))?;
            let is_markdown = entry.path().extension().and_then(|ext| ext.to_str()) == Some("md");
            if entry.file_type().is_file() && is_markdown {
                files.push(entry.into_path());
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn should_skip(entry: &walkdir::DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    matches!(
        entry.file_name().to_str(),
        Some("target" | ".git" | "node_modules")
    )
}

fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_typed_elements_with_lines() {
        let source = "\
# Usage

Start with <code type=\"contest-command\">contest init</code>, then
run <b type=\"contest-command\">contest start</b>.

<pre type=\"verify-json\">
{ \"actions\": [] }
</pre>
";
        let regions = scan_markdown(Path::new("README.md"), source);
        assert_eq!(regions.len(), 3);
        assert_eq!(regions[0].action, "contest-command");
        assert_eq!(regions[0].text, "contest init");
        assert_eq!(regions[0].line, 3);
        assert_eq!(regions[1].text, "contest start");
        assert_eq!(regions[1].line, 4);
        assert_eq!(regions[2].action, "verify-json");
        assert_eq!(regions[2].text.trim(), "{ \"actions\": [] }");
        assert_eq!(regions[2].line, 6);
    }

    #[test]
    fn strips_inner_markup_and_decodes_entities() {
        let source = r#"<a type="subcommand"><code>contest &lt;run&gt; &amp; more</code></a>"#;
        let regions = scan_markdown(Path::new("x.md"), source);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].text, "contest <run> & more");
    }

    #[test]
    fn untyped_and_unclosed_elements_are_ignored() {
        let source = "<code>plain</code> <code type=\"contest-command\">never closed";
        assert!(scan_markdown(Path::new("x.md"), source).is_empty());
    }

    #[test]
    fn markup_inside_code_is_not_a_region() {
        let source = "\
Write a region like this:

```html
<code type=\"contest-command\">contest your-command</code>
```

~~~
<code type=\"subcommand\">contest fly</code>
~~~

or inline: `<code type=\"contest-command\">contest inline</code>`.

    <code type=\"verify-json\">{ indented }</code>

Live: <code type=\"contest-command\">contest run</code>
";
        let regions = scan_markdown(Path::new("x.md"), source);
        let texts: Vec<&str> = regions.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["contest run"]);
        assert_eq!(regions[0].line, 15);
    }

    #[test]
    fn fenced_example_alone_yields_nothing() {
        let source = "Example:\n```html\n<code type=\"contest-command\">contest your-command</code>\n```\n";
        assert!(scan_markdown(Path::new("x.md"), source).is_empty());
    }

    #[test]
    fn renaming_updates_label() {
        let mut region = scan_markdown(
            Path::new("x.md"),
            r#"<code type="contest-command">contest run</code>"#,
        )
        .remove(0);
        assert_eq!(region.label, "contest-command");
        region.name("Valid Contest command: run");
        assert_eq!(region.label, "Valid Contest command: run");
    }

    #[test]
    fn collects_markdown_recursively_skipping_build_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let docs = dir.path().join("docs");
        fs::create_dir_all(docs.join("nested")).expect("mkdir");
        fs::create_dir_all(dir.path().join("target")).expect("mkdir target");
        fs::write(docs.join("b.md"), "b").expect("write");
        fs::write(docs.join("nested/a.md"), "a").expect("write");
        fs::write(docs.join("notes.txt"), "t").expect("write");
        fs::write(dir.path().join("target/skip.md"), "s").expect("write");
        fs::write(dir.path().join("README.md"), "r").expect("write");

        let files = collect_markdown(&[dir.path().to_path_buf()]).expect("collect");
        let names: Vec<String> = files
            .iter()
            .map(|p| {
                p.strip_prefix(dir.path())
                    .expect("under tempdir")
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(names, vec!["README.md", "docs/b.md", "docs/nested/a.md"]);
    }
}
