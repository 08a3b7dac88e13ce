//! HTTP client for the analysis endpoint.

use std::sync::Arc;

use log::debug;

use crate::config::ANALYZE_PATH;
use crate::error_handling::AnalyzeError;
use crate::models::{AnalysisRequest, AnalysisResult};

use super::ledger::RequestLedger;

/// Client for the remote privacy analysis service.
///
/// Wraps the shared `reqwest::Client` with the resolved base address and a
/// [`RequestLedger`]. One analysis is one `POST {base}/analyze` with a JSON
/// body; there are no retries — every failure is terminal and surfaces as a
/// typed [`AnalyzeError`].
pub struct AnalyzerClient {
    client: Arc<reqwest::Client>,
    base_url: String,
    ledger: RequestLedger,
}

impl AnalyzerClient {
    /// Creates a client for the analyzer at `base_url`.
    ///
    /// Any trailing slash on the base address is removed so the analyze path
    /// can be appended verbatim.
    pub fn new(client: Arc<reqwest::Client>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            ledger: RequestLedger::new(),
        }
    }

    /// Returns the full analysis endpoint address.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, ANALYZE_PATH)
    }

    /// Submits `website` for analysis and returns the decoded report.
    ///
    /// Issues exactly one `POST {base}/analyze` with the JSON body
    /// `{"website": "<trimmed>"}`. Empty input is rejected before any
    /// network activity. If a newer analysis is triggered while this one is
    /// in flight, the stale result resolves to `AnalyzeError::Superseded`
    /// and must not be rendered.
    ///
    /// # Errors
    ///
    /// - `AnalyzeError::EmptyWebsite` - nothing left after trimming
    /// - `AnalyzeError::Status` - the service answered with a non-2xx status
    /// - `AnalyzeError::Transport` - network-level failure
    /// - `AnalyzeError::Decode` - the body was not a valid analysis result
    /// - `AnalyzeError::Superseded` - a newer request took over
    pub async fn analyze(&self, website: &str) -> Result<AnalysisResult, AnalyzeError> {
        let website = website.trim();
        if website.is_empty() {
            return Err(AnalyzeError::EmptyWebsite);
        }

        let token = self.ledger.begin();
        debug!("Sending analysis request for {website}");

        let response = self
            .client
            .post(self.endpoint())
            .json(&AnalysisRequest {
                website: website.to_string(),
            })
            .send()
            .await
            .map_err(AnalyzeError::Transport)?;

        // Reject stale requests before touching the response so a superseded
        // analysis can never surface a result or a misleading error
        if !self.ledger.is_current(token) {
            return Err(AnalyzeError::Superseded);
        }

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyzeError::Status {
                status: status.as_u16(),
            });
        }

        let result = response
            .json::<AnalysisResult>()
            .await
            .map_err(AnalyzeError::Decode)?;

        if !self.ledger.is_current(token) {
            return Err(AnalyzeError::Superseded);
        }

        debug!(
            "Analysis response for {website}: grade {:?}, {} third-party domain(s)",
            result.privacy_grade,
            result.third_party_domains.len()
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> AnalyzerClient {
        AnalyzerClient::new(Arc::new(reqwest::Client::new()), base_url)
    }

    #[test]
    fn test_endpoint_appends_analyze_path() {
        let client = test_client("http://localhost:8080");
        assert_eq!(client.endpoint(), "http://localhost:8080/analyze");
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = test_client("http://localhost:8080/");
        assert_eq!(client.endpoint(), "http://localhost:8080/analyze");
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_website_without_request() {
        // Base URL points nowhere; an attempted request would fail with a
        // transport error rather than EmptyWebsite
        let client = test_client("http://127.0.0.1:1");
        let err = client.analyze("   ").await.unwrap_err();
        assert!(matches!(err, AnalyzeError::EmptyWebsite));
    }

    #[tokio::test]
    async fn test_analyze_unreachable_host_is_transport_error() {
        // Port 1 is closed; connection is refused immediately
        let client = test_client("http://127.0.0.1:1");
        let err = client.analyze("example.com").await.unwrap_err();
        assert!(matches!(err, AnalyzeError::Transport(_)));
    }
}
