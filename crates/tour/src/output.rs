use anyhow::{bail, Context, Result};
use colored::*;

use crate::pages::PageReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format '{}' (expected 'text' or 'json')", other),
        }
    }
}

pub fn format_reports(reports: &[PageReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(reports)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(reports).context("Failed to serialize page reports")
        }
    }
}

fn format_text(reports: &[PageReport]) -> String {
    let mut out = String::new();
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}\n", report.title.bold().blue()));
        out.push_str(&format!("{}\n", "=".repeat(report.title.len()).blue()));
        for line in &report.lines {
            out.push_str(&format!("  {}\n", line));
        }
    }
    out
}
