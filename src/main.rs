//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `privacy_grade` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing summary output and exit code
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use privacy_grade::initialization::init_logger_with;
use privacy_grade::{run_analysis, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the analysis using the library
    match run_analysis(config).await {
        Ok(report) => {
            // Panels go to stdout (or --output); keep the summary on stderr
            eprintln!(
                "✅ Analyzed {} website{} ({} succeeded, {} failed) in {:.1}s",
                report.total,
                if report.total == 1 { "" } else { "s" },
                report.successful,
                report.failed,
                report.elapsed_seconds
            );
            if let Some(path) = &report.output {
                eprintln!("Report written to {}", path.display());
            }
            if report.failed > 0 {
                process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("privacy_grade error: {:#}", e);
            process::exit(1);
        }
    }
}
