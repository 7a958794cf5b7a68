//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tyscan",
    version,
    about = "TypeScript type-hygiene analyzer",
    long_about = "Tyscan — a tiny, fast CLI that scans TypeScript sources for type anti-patterns (any usage, suppression directives, non-null assertions, Object/Function annotations) and reports by category and severity.\n\nConfiguration precedence: CLI > tyscan.toml > defaults.",
    after_help = "Examples:\n  tyscan analyze src/\n  tyscan analyze . --strict\n  tyscan analyze src/ --output report\n  tyscan new my-api --with-d1 --with-kv",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for analyzing and scaffolding.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current tyscan version.")]
    Version,
    /// Analyze TypeScript sources for type issues
    #[command(
        about = "Run type-pattern analysis",
        long_about = "Scan .ts/.tsx files under a path for type anti-patterns. In plain output the process exits 1 when any error-severity finding exists; report and json outputs always exit 0.",
        after_help = "Examples:\n  tyscan analyze src/\n  tyscan analyze src/main.ts --strict\n  tyscan analyze . --output json"
    )]
    Analyze {
        #[arg(help = "File or directory to analyze (default: current dir)")]
        path: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Treat any-usage findings as errors")]
        strict: bool,
        #[arg(long, help = "Output mode: plain|report|json (default: plain)")]
        output: Option<String>,
    },
    /// Scaffold a new Worker-style TypeScript project
    #[command(
        about = "Create a project skeleton",
        long_about = "Create a new TypeScript Worker project with wrangler.toml, src/index.ts, package.json, tsconfig.json and .gitignore. Fails if the target directory already exists.",
        after_help = "Examples:\n  tyscan new my-api\n  tyscan new my-api --with-d1 --with-kv"
    )]
    New {
        #[arg(help = "Project name (used as directory name)")]
        name: String,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Include a D1 database binding")]
        with_d1: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Include a KV namespace binding")]
        with_kv: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Include an R2 bucket binding")]
        with_r2: bool,
    },
}
