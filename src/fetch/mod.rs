//! Analyzer service client.
//!
//! This module provides the HTTP client for the remote analysis endpoint and
//! the request ledger that arbitrates overlapping analysis triggers.

mod client;
mod ledger;

// Re-export public API
pub use client::AnalyzerClient;
pub use ledger::{RequestLedger, RequestToken};
