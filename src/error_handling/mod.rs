//! Error handling types.
//!
//! This module defines the error taxonomy for initialization and for the
//! analysis request/response cycle.

mod types;

pub use types::{AnalyzeError, InitializationError};
