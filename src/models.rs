//! Shared data models for analysis output.
//!
//! Severity and category are closed enums: printers sort and tally by them,
//! and the structured output promises a fixed vocabulary, so free-text tags
//! are not allowed anywhere past the scanner.

use serde::Serialize;
use std::fmt;

/// Issue urgency. Ordering is total: `Error > Warning > Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Which rule produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    AnyUsage,
    TypeAssertion,
    TsIgnore,
    NonNullAssertion,
    ObjectType,
    FunctionType,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::AnyUsage => "any-usage",
            Category::TypeAssertion => "type-assertion",
            Category::TsIgnore => "ts-ignore",
            Category::NonNullAssertion => "non-null-assertion",
            Category::ObjectType => "object-type",
            Category::FunctionType => "function-type",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Serialize)]
/// A single detected issue with its location and classification.
pub struct Finding {
    pub file: String,
    pub line: usize,
    pub category: Category,
    pub message: &'static str,
    pub severity: Severity,
}

#[derive(Debug, Serialize)]
/// Aggregated severity tallies used by printers and the exit policy.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub files: usize,
}

/// The frozen result of one analysis invocation.
#[derive(Debug, Serialize)]
pub struct AnalysisRun {
    pub files_analyzed: usize,
    pub findings: Vec<Finding>,
    pub summary: Summary,
}

impl AnalysisRun {
    /// Fold per-file finding sequences (already in discovery order) into a
    /// frozen run. Tally order: one pass, no deduplication.
    pub fn from_findings(findings: Vec<Finding>, files_analyzed: usize) -> AnalysisRun {
        let mut errors = 0usize;
        let mut warnings = 0usize;
        let mut infos = 0usize;
        for f in &findings {
            match f.severity {
                Severity::Error => errors += 1,
                Severity::Warning => warnings += 1,
                Severity::Info => infos += 1,
            }
        }
        AnalysisRun {
            files_analyzed,
            findings,
            summary: Summary {
                errors,
                warnings,
                infos,
                files: files_analyzed,
            },
        }
    }

    /// Per-category counts in first-seen order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        let mut counts: Vec<(Category, usize)> = Vec::new();
        for f in &self.findings {
            match counts.iter_mut().find(|(c, _)| *c == f.category) {
                Some((_, n)) => *n += 1,
                None => counts.push((f.category, 1)),
            }
        }
        counts
    }
}

#[derive(Debug)]
/// A per-file failure recovered during scanning (unreadable or not UTF-8).
/// These are reported to stderr and excluded from the aggregate.
pub struct ScanError {
    pub file: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(severity: Severity, category: Category) -> Finding {
        Finding {
            file: "a.ts".into(),
            line: 1,
            category,
            message: "m",
            severity,
        }
    }

    #[test]
    fn test_severity_total_order() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }

    #[test]
    fn test_summary_partitions_findings() {
        let run = AnalysisRun::from_findings(
            vec![
                finding(Severity::Error, Category::AnyUsage),
                finding(Severity::Warning, Category::ObjectType),
                finding(Severity::Warning, Category::TsIgnore),
                finding(Severity::Info, Category::TypeAssertion),
            ],
            2,
        );
        let s = &run.summary;
        assert_eq!(s.errors + s.warnings + s.infos, run.findings.len());
        assert_eq!(s.errors, 1);
        assert_eq!(s.warnings, 2);
        assert_eq!(s.infos, 1);
        assert_eq!(s.files, 2);
    }

    #[test]
    fn test_category_counts_first_seen_order() {
        let run = AnalysisRun::from_findings(
            vec![
                finding(Severity::Info, Category::TypeAssertion),
                finding(Severity::Warning, Category::ObjectType),
                finding(Severity::Info, Category::TypeAssertion),
            ],
            1,
        );
        let counts = run.category_counts();
        assert_eq!(counts[0], (Category::TypeAssertion, 2));
        assert_eq!(counts[1], (Category::ObjectType, 1));
    }

    #[test]
    fn test_serialized_tags_are_kebab_and_lowercase() {
        let f = finding(Severity::Warning, Category::NonNullAssertion);
        let v = serde_json::to_value(&f).unwrap();
        assert_eq!(v["severity"], "warning");
        assert_eq!(v["category"], "non-null-assertion");
    }
}
