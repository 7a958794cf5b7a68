//! Source file discovery.
//!
//! Enumerates `.ts`/`.tsx` files under a root directory via recursive globs,
//! dropping anything under build/output/dependency directories. A root that
//! is itself a matching file is returned as-is, exclusions ignored.

use glob::glob;
use std::path::{Path, PathBuf};

const EXTENSIONS: [&str; 2] = ["ts", "tsx"];
const DEFAULT_EXCLUDE: [&str; 5] = ["node_modules", "dist", "build", ".next", "coverage"];

fn has_source_extension(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => EXTENSIONS.contains(&ext),
        None => false,
    }
}

fn is_excluded(path: &Path, extra_exclude: &[String]) -> bool {
    path.components().any(|c| {
        let seg = c.as_os_str().to_string_lossy();
        DEFAULT_EXCLUDE.contains(&seg.as_ref()) || extra_exclude.iter().any(|e| e == seg.as_ref())
    })
}

/// Find analyzable TypeScript files under `root`.
///
/// Returns paths sorted ascending so downstream order never depends on
/// traversal or scheduling. An empty result is a valid outcome, not an
/// error.
pub fn find_source_files(root: &Path, extra_exclude: &[String]) -> Vec<PathBuf> {
    if root.is_file() {
        if has_source_extension(root) {
            return vec![root.to_path_buf()];
        }
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for ext in EXTENSIONS {
        let pattern = root.join(format!("**/*.{}", ext));
        let pattern = pattern.to_string_lossy().to_string();
        if let Ok(entries) = glob(&pattern) {
            for entry in entries.flatten() {
                if entry.is_file() && !is_excluded(&entry, extra_exclude) {
                    files.push(entry);
                }
            }
        }
    }
    files.sort();
    files.dedup();
    files
}
