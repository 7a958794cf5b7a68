//! Reporters for analysis results.
//!
//! Three independent renderings of a frozen `AnalysisRun`:
//! - plain: one colored line per finding plus a short header,
//! - json: a deterministic structured dump for machine consumption,
//! - report: a markdown document with severity/category breakdowns and
//!   per-file tables.
//!
//! Compose functions are pure so shapes can be asserted in tests; printers
//! only add stdout and color.

use crate::models::{AnalysisRun, Finding, Severity};
use owo_colors::OwoColorize;
use serde_json::{json, Value as JsonVal};
use std::collections::BTreeMap;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn severity_icon(severity: Severity, color: bool) -> String {
    match severity {
        Severity::Error => {
            if color {
                "✖".red().to_string()
            } else {
                "✖".to_string()
            }
        }
        Severity::Warning => {
            if color {
                "▲".yellow().to_string()
            } else {
                "▲".to_string()
            }
        }
        Severity::Info => {
            if color {
                "◆".blue().to_string()
            } else {
                "◆".to_string()
            }
        }
    }
}

/// Print the plain listing: header plus one line per finding in aggregation
/// order.
pub fn print_plain(run: &AnalysisRun) {
    let color = use_colors("plain");
    let header = format!(
        "Analyzed {} files, found {} issues",
        run.files_analyzed,
        run.findings.len()
    );
    if color {
        println!("{}\n", header.bold());
    } else {
        println!("{}\n", header);
    }
    for f in &run.findings {
        let icon = severity_icon(f.severity, color);
        let location = format!("{}:{}", f.file, f.line);
        let location = if color {
            location.bold().to_string()
        } else {
            location
        };
        println!("{} {} [{}] {}", icon, location, f.category, f.message);
    }
}

/// Compose the structured dump (pure) for testing/snapshot purposes.
pub fn compose_analysis_json(run: &AnalysisRun) -> JsonVal {
    json!({
        "files_analyzed": run.files_analyzed,
        "total_issues": run.findings.len(),
        "issues": &run.findings,
    })
}

/// Print the structured dump to stdout.
pub fn print_json(run: &AnalysisRun) {
    println!(
        "{}",
        serde_json::to_string_pretty(&compose_analysis_json(run)).unwrap()
    );
}

/// Compose the markdown report (pure).
///
/// Layout: totals heading, severity breakdown in fixed error/warning/info
/// order, category breakdown by descending count (first-seen order breaks
/// ties), then per-file tables sorted by path with rows sorted by line.
pub fn compose_report(run: &AnalysisRun) -> String {
    let mut out: Vec<String> = Vec::new();
    out.push("# TypeScript Type Analysis Report\n".to_string());
    out.push(format!("**Files analyzed:** {}\n", run.files_analyzed));
    out.push(format!("**Total issues:** {}\n", run.findings.len()));

    out.push("\n## Summary by Severity\n".to_string());
    out.push(format!("- Errors: {}", run.summary.errors));
    out.push(format!("- Warnings: {}", run.summary.warnings));
    out.push(format!("- Info: {}", run.summary.infos));

    out.push("\n## Summary by Category\n".to_string());
    let mut categories = run.category_counts();
    // Stable sort keeps first-seen order among equal counts.
    categories.sort_by(|a, b| b.1.cmp(&a.1));
    for (category, count) in categories {
        out.push(format!("- {}: {}", category, count));
    }

    let mut by_file: BTreeMap<&str, Vec<&Finding>> = BTreeMap::new();
    for f in &run.findings {
        by_file.entry(f.file.as_str()).or_default().push(f);
    }

    out.push("\n## Issues by File\n".to_string());
    for (file, mut file_findings) in by_file {
        file_findings.sort_by_key(|f| f.line);
        out.push(format!("\n### `{}`\n", file));
        out.push("| Line | Severity | Category | Message |".to_string());
        out.push("|------|----------|----------|---------|".to_string());
        for f in file_findings {
            out.push(format!(
                "| {} | {} | {} | {} |",
                f.line, f.severity, f.category, f.message
            ));
        }
    }

    out.join("\n")
}

/// Print the markdown report to stdout.
pub fn print_report(run: &AnalysisRun) {
    println!("{}", compose_report(run));
}
