//! privacy_grade library: website privacy report retrieval and rendering
//!
//! This library provides the client side of a website privacy analysis
//! service: it validates a website input, submits it to the remote analyzer
//! endpoint, and renders the returned privacy report as an HTML result panel
//! or a colored terminal block.
//!
//! # Example
//!
//! ```no_run
//! use privacy_grade::{run_analysis, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     website: "example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_analysis(config).await?;
//! println!("Analyzed {} website(s): {} succeeded, {} failed",
//!          report.total, report.successful, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
pub mod fetch;
pub mod initialization;
mod models;
pub mod render;

// Re-export public API
pub use config::{Config, Environment, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{AnalyzeError, InitializationError};
pub use models::{AnalysisRequest, AnalysisResult};
pub use run::{run_analysis, AnalysisReport};

// Internal run module (contains the analyze trigger orchestration)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{info, warn};
    use tokio::io::{AsyncBufReadExt, BufReader};

    use crate::app::normalize_website;
    use crate::config::{Config, OutputFormat};
    use crate::error_handling::AnalyzeError;
    use crate::fetch::AnalyzerClient;
    use crate::initialization::init_client;
    use crate::models::AnalysisResult;
    use crate::render;

    /// Results of an analysis run.
    ///
    /// Contains summary statistics about the completed run; the rendered
    /// panels themselves are written to stdout or the configured output file.
    #[derive(Debug, Clone)]
    pub struct AnalysisReport {
        /// Total number of websites processed
        pub total: usize,
        /// Number of websites analyzed successfully
        pub successful: usize,
        /// Number of websites that failed validation or analysis
        pub failed: usize,
        /// Path the rendered panel was written to, if not stdout
        pub output: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs an analysis with the provided configuration.
    ///
    /// This is the main entry point for the library. It validates the website
    /// input (or reads websites from stdin when the input is `-`), submits
    /// each to the analyzer endpoint, and renders one panel per website.
    /// Websites are processed strictly sequentially; at most one request is
    /// in flight at any time.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the run (website, endpoint, format, etc.)
    ///
    /// # Returns
    ///
    /// Returns an `AnalysisReport` with summary statistics, or an error if
    /// the run could not start at all.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The HTTP client cannot be initialized
    /// - The output file cannot be written
    ///
    /// A failed analysis of an individual website is not an error at this
    /// level: it renders an error panel and is counted in `failed`.
    pub async fn run_analysis(config: Config) -> Result<AnalysisReport> {
        let client = init_client(&config)
            .await
            .context("Failed to initialize HTTP client")?;
        let analyzer = AnalyzerClient::new(client, config.base_url());
        info!("Analyzer endpoint: {}", analyzer.endpoint());

        let start_time = Instant::now();
        let mut total = 0usize;
        let mut successful = 0usize;
        let mut failed = 0usize;
        let mut panels: Vec<String> = Vec::new();

        if config.website == "-" {
            info!("Reading websites from stdin");
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                let line = match lines.next_line().await {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        warn!("Failed to read line from stdin: {e}");
                        continue;
                    }
                };

                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }

                total += 1;
                let (panel, ok) = analyze_one(&config, &analyzer, trimmed).await;
                panels.push(panel);
                if ok {
                    successful += 1;
                } else {
                    failed += 1;
                }
            }
        } else {
            total = 1;
            let (panel, ok) = analyze_one(&config, &analyzer, &config.website).await;
            panels.push(panel);
            if ok {
                successful += 1;
            } else {
                failed += 1;
            }
        }

        let rendered = panels.join("\n");
        match &config.output {
            Some(path) => {
                tokio::fs::write(path, rendered.as_bytes())
                    .await
                    .with_context(|| format!("Failed to write output to {}", path.display()))?;
            }
            None => println!("{rendered}"),
        }

        Ok(AnalysisReport {
            total,
            successful,
            failed,
            output: config.output.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

    /// Analyzes a single website and renders its panel.
    ///
    /// The loading indicator is an info-level log line; the returned panel
    /// fully replaces it as the visible outcome. Returns the rendered panel
    /// and whether the analysis succeeded.
    async fn analyze_one(config: &Config, analyzer: &AnalyzerClient, raw: &str) -> (String, bool) {
        let Some(website) = normalize_website(raw) else {
            warn!("Empty website input, no request issued");
            return (render_validation_error(config), false);
        };

        info!("🔎 Analyzing {website} ...");

        match analyzer.analyze(&website).await {
            Ok(result) => {
                info!(
                    "Analysis complete for {website}: grade {}",
                    render::display_grade(&result.privacy_grade)
                );
                (render_result(config, &result), true)
            }
            Err(AnalyzeError::EmptyWebsite) => {
                warn!("Empty website input, no request issued");
                (render_validation_error(config), false)
            }
            Err(e) => {
                warn!("Analysis failed for {website}: {e}");
                (render_error(config, &e.to_string()), false)
            }
        }
    }

    fn render_result(config: &Config, result: &AnalysisResult) -> String {
        match config.format {
            OutputFormat::Html => render::render_result_html(result),
            OutputFormat::Text => render::render_result_text(result),
        }
    }

    fn render_error(config: &Config, message: &str) -> String {
        match config.format {
            OutputFormat::Html => render::render_error_html(message),
            OutputFormat::Text => render::render_error_text(message),
        }
    }

    fn render_validation_error(config: &Config) -> String {
        match config.format {
            OutputFormat::Html => render::render_invalid_input_html(),
            OutputFormat::Text => render::render_invalid_input_text(),
        }
    }
}
