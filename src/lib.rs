//! Tyscan core library.
//!
//! This crate exposes programmatic APIs for scanning TypeScript source trees
//! for type anti-patterns and for scaffolding new Worker-style projects.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Config discovery and effective configuration resolution.
//! - `discovery`: Recursive `.ts`/`.tsx` enumeration with exclusions.
//! - `rules`: The rule table and line scanner.
//! - `analyze`: Per-file scanning and aggregation into an `AnalysisRun`.
//! - `models`: Severity/category enums and analysis output structs.
//! - `output`: Plain/json/report printers over a frozen run.
//! - `scaffold`: Project skeleton emission for `tyscan new`.
//! - `utils`: Supporting helpers.
pub mod analyze;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod models;
pub mod output;
pub mod rules;
pub mod scaffold;
pub mod utils;
