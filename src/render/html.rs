//! HTML panel rendering.
//!
//! Produces the HTML fragments of the result panel contract: a loading
//! panel, an error panel, and the result panel with grade badge, tier label,
//! findings table, and truncated third-party list. All interpolated text is
//! escaped; the service's strings are data, not markup.

use crate::config::DISPLAYED_THIRD_PARTY_LIMIT;
use crate::models::AnalysisResult;

use super::{display_grade, RiskTier};

/// Escapes text for interpolation into HTML element content and attributes.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the transient loading panel.
pub fn render_loading_html() -> String {
    r#"<div class="loading-msg">🔎 Analyzing website... please wait</div>"#.to_string()
}

/// Renders the validation error panel for empty input.
pub fn render_invalid_input_html() -> String {
    r#"<div class="error-msg">⚠️ Please enter a valid website URL.</div>"#.to_string()
}

/// Renders the error panel for a failed analysis.
pub fn render_error_html(message: &str) -> String {
    format!(
        r#"<div class="error-msg">❌ Error: {}</div>"#,
        escape_html(message)
    )
}

/// Renders the result panel for a completed analysis.
///
/// The third-party list is rendered only when the service reported any
/// domains, and shows at most the first [`DISPLAYED_THIRD_PARTY_LIMIT`]
/// entries in their original order.
pub fn render_result_html(result: &AnalysisResult) -> String {
    let grade = display_grade(&result.privacy_grade);
    let tier = RiskTier::from_grade(grade);

    let third_parties = if result.third_party_domains.is_empty() {
        String::new()
    } else {
        let items: String = result
            .third_party_domains
            .iter()
            .take(DISPLAYED_THIRD_PARTY_LIMIT)
            .map(|domain| format!("<li>{}</li>", escape_html(domain)))
            .collect();
        format!("\n  <h6>3rd Parties Detected:</h6>\n  <ul>{items}</ul>")
    };

    format!(
        r#"<div class="results-glass">
  <div class="score-row">
    <div class="score-circle">{grade}</div>
    <div class="score-label"><span class="{tier_class}"><span class="icon">{icon}</span>{label}</span></div>
  </div>
  <div class="summary">{summary}</div>
  <div class="examples">{examples}</div>
  <table class="findings">
    <tr><th>Cookies</th><td>{cookies}</td></tr>
    <tr><th>Third-party domains</th><td>{third_party}</td></tr>
    <tr><th>Storage entries</th><td>{storage}</td></tr>
  </table>{third_parties}
</div>"#,
        grade = escape_html(grade),
        tier_class = tier.css_class(),
        icon = tier.icon(),
        label = escape_html(&tier.label(grade)),
        summary = escape_html(&result.analysis_summary),
        examples = escape_html(&result.examples),
        cookies = result.cookies_found,
        third_party = result.third_party_found,
        storage = result.storage_found,
        third_parties = third_parties,
    )
}
