//! Wire types exchanged with the analyzer service.

use serde::{Deserialize, Serialize};

/// Request body for `POST /analyze`.
///
/// The website value is the trimmed user input, sent verbatim; the service
/// is responsible for any further normalization.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    /// Website address to analyze
    pub website: String,
}

/// Privacy report returned by the analyzer service.
///
/// Field names follow the service's camelCase wire format. Every field is
/// individually defaulted so a sparse response still decodes; the renderer
/// handles missing data (e.g. an absent grade falls back to "C").
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Short grade code summarizing tracking risk (e.g. "A+", "B", "D")
    #[serde(default)]
    pub privacy_grade: String,

    /// Human-readable summary of the analysis
    #[serde(default)]
    pub analysis_summary: String,

    /// Illustrative comparison or example text
    #[serde(default)]
    pub examples: String,

    /// Number of cookies observed on the website
    #[serde(default)]
    pub cookies_found: u32,

    /// Number of distinct third-party domains observed
    #[serde(default)]
    pub third_party_found: u32,

    /// Number of local/session storage entries observed
    #[serde(default)]
    pub storage_found: u32,

    /// Third-party domains, in the order reported by the service
    #[serde(default)]
    pub third_party_domains: Vec<String>,

    /// Website the report refers to, echoed back by the service
    #[serde(default)]
    pub website: Option<String>,

    /// Title of the analyzed page, when the service captured one
    #[serde(default)]
    pub page_title: Option<String>,
}
