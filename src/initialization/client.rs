//! HTTP client initialization.
//!
//! This module provides the function to initialize the HTTP client used for
//! analyzer requests.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the HTTP client for analyzer requests.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Per-request timeout from the configuration
///
/// # Arguments
///
/// * `config` - Configuration containing user-agent and timeout settings
///
/// # Returns
///
/// A configured HTTP client ready for making requests.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub async fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_client_with_defaults() {
        let config = Config::default();
        let client = init_client(&config).await;
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_init_client_with_custom_settings() {
        let config = Config {
            timeout_seconds: 1,
            user_agent: "privacy_grade_test/1.0".to_string(),
            ..Default::default()
        };
        let client = init_client(&config).await;
        assert!(client.is_ok());
    }
}
