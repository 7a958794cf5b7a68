//! Pattern rules and the line scanner.
//!
//! Rules are declarative records evaluated uniformly per line: adding a rule
//! means adding a table entry, not touching scanner control flow. Each rule
//! owns its false-positive suppression; the scanner just walks lines.

use crate::models::{Category, Finding, Severity};
use regex::Regex;
use std::sync::LazyLock;

static ANY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bany\b").unwrap());
static ANY_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//.*any|/\*.*any").unwrap());
static AS_CAST_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bas\s+\w+").unwrap());
static TS_IGNORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@ts-(ignore|expect-error)\s*$").unwrap());
static NON_NULL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\s*[.;)\]]").unwrap());
static OBJECT_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":\s*Object\b").unwrap());
static FUNCTION_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":\s*Function\b").unwrap());

/// One line-level rule: a predicate, the category it reports, a fixed
/// message, and a severity chosen from the strict flag.
pub struct Rule {
    pub category: Category,
    pub message: &'static str,
    pub matches: fn(&str) -> bool,
    pub severity: fn(strict: bool) -> Severity,
}

fn matches_any_usage(line: &str) -> bool {
    // A mention inside a same-line comment is prose, not a usage.
    ANY_RE.is_match(line) && !ANY_COMMENT_RE.is_match(line)
}

fn matches_type_assertion(line: &str) -> bool {
    AS_CAST_RE.is_match(line)
}

fn matches_ts_ignore(line: &str) -> bool {
    TS_IGNORE_RE.is_match(line)
}

fn matches_non_null(line: &str) -> bool {
    // `!=`/`!==` are comparisons, not assertions; suppression is by substring,
    // so a prefix logical-not on the same line can still slip through.
    NON_NULL_RE.is_match(line) && !line.contains("!==") && !line.contains("!=")
}

fn matches_object_type(line: &str) -> bool {
    OBJECT_TYPE_RE.is_match(line)
}

fn matches_function_type(line: &str) -> bool {
    FUNCTION_TYPE_RE.is_match(line)
}

fn any_usage_severity(strict: bool) -> Severity {
    if strict {
        Severity::Error
    } else {
        Severity::Warning
    }
}

fn fixed_warning(_strict: bool) -> Severity {
    Severity::Warning
}

fn fixed_info(_strict: bool) -> Severity {
    Severity::Info
}

/// The ordered rule table. `any-usage` is the only rule whose severity
/// depends on run configuration.
pub static RULES: &[Rule] = &[
    Rule {
        category: Category::AnyUsage,
        message: "Explicit use of \"any\" type",
        matches: matches_any_usage,
        severity: any_usage_severity,
    },
    Rule {
        category: Category::TypeAssertion,
        message: "Type assertion detected - prefer type guards",
        matches: matches_type_assertion,
        severity: fixed_info,
    },
    Rule {
        category: Category::TsIgnore,
        message: "@ts-ignore/expect-error without explanation",
        matches: matches_ts_ignore,
        severity: fixed_warning,
    },
    Rule {
        category: Category::NonNullAssertion,
        message: "Non-null assertion (!) - consider explicit null check",
        matches: matches_non_null,
        severity: fixed_info,
    },
    Rule {
        category: Category::ObjectType,
        message: "Use \"object\" (lowercase) or specific type instead of \"Object\"",
        matches: matches_object_type,
        severity: fixed_warning,
    },
    Rule {
        category: Category::FunctionType,
        message: "Use specific function signature instead of \"Function\"",
        matches: matches_function_type,
        severity: fixed_warning,
    },
];

/// Scan one file's full content, producing findings in line order.
///
/// Lines are 1-indexed. Every rule is tested against every line, so a single
/// line may yield several findings; within a line, findings follow table
/// order.
pub fn scan_content(file: &str, content: &str, strict: bool) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (idx, line) in content.split('\n').enumerate() {
        for rule in RULES {
            if (rule.matches)(line) {
                findings.push(Finding {
                    file: file.to_string(),
                    line: idx + 1,
                    category: rule.category,
                    message: rule.message,
                    severity: (rule.severity)(strict),
                });
            }
        }
    }
    findings
}
