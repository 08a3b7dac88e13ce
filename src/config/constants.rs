//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the
//! application, including the analyzer endpoints and display limits.

/// Base address of the analyzer service when targeting a local instance.
pub const LOCAL_BASE_URL: &str = "http://localhost:8080";

/// Base address of the hosted production analyzer service.
pub const PRODUCTION_BASE_URL: &str = "https://privacyanalyzer.onrender.com";

/// Path of the analysis endpoint, relative to the base address.
pub const ANALYZE_PATH: &str = "/analyze";

/// Default per-request timeout in seconds.
///
/// The analyzer drives a headless browser against the target website, so a
/// single request can legitimately take tens of seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Default User-Agent header value for requests to the analyzer.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("privacy_grade/", env!("CARGO_PKG_VERSION"));

/// Maximum number of third-party domains shown in a rendered panel.
///
/// The service may report many more; the panel truncates to the first
/// entries in their original order.
pub const DISPLAYED_THIRD_PARTY_LIMIT: usize = 5;
