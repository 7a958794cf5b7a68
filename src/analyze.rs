//! Analysis runner: scans discovered files and folds findings into a run.
//!
//! Files are scanned in parallel, but targets are sorted before the map and
//! results are concatenated in target order, so the aggregate is a pure
//! function of file contents and configuration regardless of scheduling.
//!
//! Per-file failures (unreadable file, invalid UTF-8) are isolated into
//! `ScanError`s and never abort the run; the aggregate covers the
//! successfully scanned subset.

use crate::config::OutputMode;
use crate::models::{AnalysisRun, Finding, ScanError, Summary};
use crate::rules::scan_content;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Present a path relative to `root` when possible, for stable and readable
/// finding locations.
fn display_path(path: &Path, root: &Path) -> String {
    let base = if root.is_file() {
        root.parent().unwrap_or(root)
    } else {
        root
    };
    pathdiff::diff_paths(path, base)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

/// Scan every file and aggregate the findings.
///
/// Returns the frozen `AnalysisRun` plus any per-file scan errors. Files that
/// fail to read are excluded from `files_analyzed`.
pub fn run_analysis(root: &Path, files: &[PathBuf], strict: bool) -> (AnalysisRun, Vec<ScanError>) {
    let per_file: Vec<Result<Vec<Finding>, ScanError>> = files
        .par_iter()
        .map(|path| {
            let shown = display_path(path, root);
            match fs::read_to_string(path) {
                Ok(content) => Ok(scan_content(&shown, &content, strict)),
                Err(e) => Err(ScanError {
                    file: shown,
                    message: e.to_string(),
                }),
            }
        })
        .collect();

    let mut findings: Vec<Finding> = Vec::new();
    let mut errors: Vec<ScanError> = Vec::new();
    let mut analyzed = 0usize;
    for result in per_file {
        match result {
            Ok(mut fs) => {
                analyzed += 1;
                findings.append(&mut fs);
            }
            Err(e) => errors.push(e),
        }
    }
    (AnalysisRun::from_findings(findings, analyzed), errors)
}

/// Process exit code for a completed run. Reporters never alter exit
/// status: only the plain mode fails, and only on error-severity findings.
pub fn exit_code(output: OutputMode, summary: &Summary) -> i32 {
    match output {
        OutputMode::Plain if summary.errors > 0 => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::find_source_files;
    use crate::models::{Category, Severity};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_aggregates_across_files_in_path_order() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("a.ts"), "const x: any = 1;\n").unwrap();
        fs::write(root.join("b.ts"), "f(user!.name);\nconst o: Object = {};\n").unwrap();
        let files = find_source_files(root, &[]);
        let (run, errors) = run_analysis(root, &files, false);
        assert!(errors.is_empty());
        assert_eq!(run.files_analyzed, 2);
        assert_eq!(run.findings.len(), 3);
        // a.ts first, then b.ts in line order
        assert_eq!(run.findings[0].file, "a.ts");
        assert_eq!(run.findings[0].category, Category::AnyUsage);
        assert_eq!(run.findings[1].file, "b.ts");
        assert_eq!(run.findings[1].line, 1);
        assert_eq!(run.findings[2].line, 2);
        let s = &run.summary;
        assert_eq!(s.errors + s.warnings + s.infos, run.findings.len());
    }

    #[test]
    fn test_strict_escalation_end_to_end() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("a.ts"), "const x: any = 1;\n").unwrap();
        let files = find_source_files(root, &[]);
        let (relaxed, _) = run_analysis(root, &files, false);
        let (strict, _) = run_analysis(root, &files, true);
        assert_eq!(relaxed.summary.errors, 0);
        assert_eq!(relaxed.summary.warnings, 1);
        assert_eq!(strict.summary.errors, 1);
        assert_eq!(strict.summary.warnings, 0);
    }

    #[test]
    fn test_unreadable_file_is_isolated() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("good.ts"), "const x: any = 1;\n").unwrap();
        // Invalid UTF-8 makes read_to_string fail.
        fs::write(root.join("bad.ts"), [0xffu8, 0xfe, 0x00, 0x9f]).unwrap();
        let files = find_source_files(root, &[]);
        let (run, errors) = run_analysis(root, &files, false);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].file, "bad.ts");
        assert_eq!(run.files_analyzed, 1);
        assert_eq!(run.findings.len(), 1);
        assert_eq!(run.findings[0].file, "good.ts");
    }

    #[test]
    fn test_empty_input_is_a_clean_run() {
        let dir = tempdir().unwrap();
        let (run, errors) = run_analysis(dir.path(), &[], false);
        assert!(errors.is_empty());
        assert_eq!(run.files_analyzed, 0);
        assert!(run.findings.is_empty());
        assert_eq!(run.summary.errors, 0);
    }

    #[test]
    fn test_exit_code_plain_fails_only_on_errors() {
        let with_error = Summary {
            errors: 1,
            warnings: 0,
            infos: 2,
            files: 1,
        };
        let without_error = Summary {
            errors: 0,
            warnings: 3,
            infos: 2,
            files: 1,
        };
        assert_eq!(exit_code(OutputMode::Plain, &with_error), 1);
        assert_eq!(exit_code(OutputMode::Plain, &without_error), 0);
        // Report and json modes exit 0 regardless of findings.
        assert_eq!(exit_code(OutputMode::Report, &with_error), 0);
        assert_eq!(exit_code(OutputMode::Json, &with_error), 0);
    }

    #[test]
    fn test_file_root_reports_bare_name() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("single.ts");
        fs::write(&file, "let f: Function;\n").unwrap();
        let files = vec![file.clone()];
        let (run, _) = run_analysis(&file, &files, false);
        assert_eq!(run.findings.len(), 1);
        assert_eq!(run.findings[0].file, "single.ts");
        assert_eq!(run.findings[0].severity, Severity::Warning);
    }
}
