//! Configuration discovery and effective settings resolution.
//!
//! Tyscan reads `tyscan.toml|yaml|yml` from the analysis root (or closest
//! ancestor) and merges it with CLI flags. Defaults:
//! - `strict`: false
//! - `output`: `plain`
//! - `exclude`: empty (on top of the built-in excluded directories)
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Output mode selected for a run. Exactly one reporter runs per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Plain,
    Report,
    Json,
}

impl OutputMode {
    /// Parse a user-supplied mode token; `None` for unknown tokens.
    pub fn parse(s: &str) -> Option<OutputMode> {
        match s {
            "plain" => Some(OutputMode::Plain),
            "report" => Some(OutputMode::Report),
            "json" => Some(OutputMode::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `tyscan.toml|yaml|yml`.
pub struct TyscanConfig {
    pub strict: Option<bool>,
    pub output: Option<String>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the analysis run.
pub struct Effective {
    pub root: PathBuf,
    pub strict: bool,
    pub output: OutputMode,
    pub exclude: Vec<String>,
}

/// Walk upward from `start` to find the directory holding a tyscan config.
///
/// Stops at the first `tyscan.toml|yaml|yml` or `.git` directory; falls back
/// to `start` itself.
pub fn detect_config_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("tyscan.toml").exists()
            || cur.join("tyscan.yaml").exists()
            || cur.join("tyscan.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `TyscanConfig` from `tyscan.toml` or `tyscan.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<TyscanConfig> {
    let toml_path = root.join("tyscan.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: TyscanConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["tyscan.yaml", "tyscan.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: TyscanConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Discover and load the config governing `root` (walking up from its
/// parent when `root` is a file). `None` when no config file exists.
pub fn find_config(root: &Path) -> Option<TyscanConfig> {
    let search_start = if root.is_file() {
        root.parent().unwrap_or(root)
    } else {
        root
    };
    load_config(&detect_config_root(search_start))
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// `cli_root` is the path to analyze (defaults to `.`); the config file is
/// discovered by walking up from it (its parent when it is a file).
pub fn resolve_effective(
    cli_root: Option<&str>,
    cli_strict: bool,
    cli_output: Option<&str>,
) -> Result<Effective, String> {
    let root = PathBuf::from(cli_root.unwrap_or("."));
    let cfg = find_config(&root).unwrap_or_default();

    let strict = cli_strict || cfg.strict.unwrap_or(false);

    let output_src = cli_output.map(|s| s.to_string()).or(cfg.output);
    let output = match output_src {
        Some(s) => OutputMode::parse(&s)
            .ok_or_else(|| format!("unknown output mode '{}' (expected plain|report|json)", s))?,
        None => OutputMode::Plain,
    };

    let exclude = cfg.exclude.unwrap_or_default();

    Ok(Effective {
        root,
        strict,
        output,
        exclude,
    })
}
