//! Tyscan CLI binary entry point.
//! Delegates to modules for analysis and scaffolding and prints results.

mod analyze;
mod cli;
mod config;
mod discovery;
mod models;
mod output;
mod rules;
mod scaffold;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use config::OutputMode;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Analyze {
            path,
            strict,
            output,
        } => {
            let eff = match config::resolve_effective(path.as_deref(), strict, output.as_deref()) {
                Ok(eff) => eff,
                Err(msg) => {
                    eprintln!("{} {}", utils::error_prefix(), msg);
                    std::process::exit(2);
                }
            };
            // Friendly note if no tyscan config was found.
            if config::find_config(&eff.root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No tyscan.toml found; using defaults."
                );
            }
            // Fatal: nothing to scan at all.
            if !eff.root.exists() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!("Path '{}' does not exist", eff.root.to_string_lossy())
                );
                std::process::exit(1);
            }
            let files = discovery::find_source_files(&eff.root, &eff.exclude);
            if files.is_empty() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    format!(
                        "No TypeScript files found in '{}'",
                        eff.root.to_string_lossy()
                    )
                );
                std::process::exit(0);
            }
            let (run, errors) = analyze::run_analysis(&eff.root, &files, eff.strict);
            // Per-file failures are diagnostics only; the run still reports
            // on the successfully scanned subset.
            for e in &errors {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!("Error analyzing {}: {}", e.file, e.message)
                );
            }
            match eff.output {
                OutputMode::Json => output::print_json(&run),
                OutputMode::Report => output::print_report(&run),
                OutputMode::Plain => output::print_plain(&run),
            }
            let code = analyze::exit_code(eff.output, &run.summary);
            if code != 0 {
                std::process::exit(code);
            }
        }
        Commands::New {
            name,
            with_d1,
            with_kv,
            with_r2,
        } => {
            let opts = scaffold::ScaffoldOptions {
                with_d1,
                with_kv,
                with_r2,
            };
            match scaffold::create_project(std::path::Path::new("."), &name, &opts) {
                Ok(_) => {
                    println!("Created Worker project: {}", name);
                    println!("\nNext steps:");
                    for step in scaffold::next_steps(&name, &opts) {
                        println!("  {}", step);
                    }
                }
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(1);
                }
            }
        }
    }
}
