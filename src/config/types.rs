//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use url::Url;

use crate::config::constants::{
    DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT, LOCAL_BASE_URL, PRODUCTION_BASE_URL,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogFormat::Plain => "plain",
            LogFormat::Json => "json",
        })
    }
}

/// Target analyzer environment.
///
/// Selects which fixed analyzer base address is used. An explicit
/// `--endpoint` value overrides the environment entirely.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    /// Analyzer running on this machine
    Local,
    /// Hosted production analyzer
    Production,
}

impl Environment {
    /// Returns the fixed base address for this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Local => LOCAL_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Environment::Local => "local",
            Environment::Production => "production",
        })
    }
}

/// Rendered panel output format.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal block (default)
    Text,
    /// HTML fragment following the result panel markup contract
    Html,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
        })
    }
}

/// Application configuration.
///
/// Parsed from the command line in the binary; can also be constructed
/// programmatically for library use.
///
/// # Examples
///
/// ```no_run
/// use privacy_grade::Config;
///
/// let config = Config {
///     website: "example.com".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "privacy_grade",
    about = "Submit a website to a privacy analysis service and render its privacy report"
)]
pub struct Config {
    /// Website to analyze; use "-" to read websites from stdin, one per line
    pub website: String,

    /// Target analyzer environment
    #[arg(long, value_enum, default_value_t = Environment::Production)]
    pub environment: Environment,

    /// Explicit analyzer base URL (overrides --environment)
    #[arg(long)]
    pub endpoint: Option<Url>,

    /// Output format for rendered panels
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write rendered panels to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Resolves the analyzer base address from the configuration.
    ///
    /// An explicit `--endpoint` takes precedence over the environment's
    /// fixed address. Any trailing slash is removed so the analyze path can
    /// be appended verbatim.
    pub fn base_url(&self) -> String {
        match &self.endpoint {
            Some(url) => url.as_str().trim_end_matches('/').to_string(),
            None => self.environment.base_url().to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            website: String::new(),
            environment: Environment::Production,
            endpoint: None,
            format: OutputFormat::Text,
            output: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
