//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors surfaced by a single analysis request.
///
/// Validation failures (`EmptyWebsite`, detected before any network
/// activity) and request failures (`Status`, `Transport`, `Decode`) both
/// map here.
/// `Superseded` is the typed outcome of the request ledger discarding a
/// stale in-flight request.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// Empty or whitespace-only website input; no request was issued.
    #[error("Please enter a valid website URL")]
    EmptyWebsite,

    /// The service answered with a non-success HTTP status.
    #[error("Server error: {status}")]
    Status {
        /// HTTP status code returned by the service
        status: u16,
    },

    /// Network-level failure (unreachable host, timeout, TLS failure).
    #[error("Request failed: {0}")]
    Transport(#[source] ReqwestError),

    /// The response body could not be decoded as an analysis result.
    #[error("Invalid analysis response: {0}")]
    Decode(#[source] ReqwestError),

    /// A newer analysis was triggered while this one was in flight; the
    /// stale result is discarded instead of racing to render.
    #[error("Analysis superseded by a newer request")]
    Superseded,
}

impl AnalyzeError {
    /// Returns the HTTP status code for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            AnalyzeError::Status { status } => Some(*status),
            _ => None,
        }
    }
}
