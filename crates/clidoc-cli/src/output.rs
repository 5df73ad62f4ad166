//! Result printing for human and JSON modes.
//!
//! Human mode prints one line per region to stdout and the summary to
//! stderr. JSON mode prints a single `{ data, summary }` document.

use anyhow::Result;
use serde::Serialize;
use serde_json::json;

use crate::opts::GlobalOpts;

#[derive(Debug, Serialize)]
pub struct RegionReport {
    pub file: String,
    pub line: usize,
    pub action: String,
    pub name: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn print_reports(opts: &GlobalOpts, reports: &[RegionReport]) -> Result<()> {
    let failed = reports.iter().filter(|r| !r.ok).count();
    if opts.json {
        let root = json!({
            "data": reports,
            "summary": { "total": reports.len(), "failed": failed },
        });
        println!("{}", serde_json::to_string_pretty(&root)?);
        return Ok(());
    }
    for report in reports {
        match &report.error {
            None => println!("{}:{} -- {} ... ok", report.file, report.line, report.name),
            Some(error) => {
                println!("{}:{} -- {} ... FAILED", report.file, report.line, report.name);
                for line in error.lines() {
                    println!("    {line}");
                }
            }
        }
    }
    eprintln!("{} regions checked, {failed} failed", reports.len());
    Ok(())
}

pub fn print_list(opts: &GlobalOpts, items: &[String]) -> Result<()> {
    if opts.json {
        println!("{}", serde_json::to_string(&json!({ "data": items }))?);
    } else {
        for item in items {
            println!("{item}");
        }
    }
    Ok(())
}
