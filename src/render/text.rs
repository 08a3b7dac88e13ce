//! Terminal text rendering.
//!
//! Renders the same panel content as the HTML renderer, as a colored block
//! for terminal output. Tier colors mirror the badge colors of the HTML
//! contract: green for low risk, yellow for medium, blue for high.

use std::fmt::Write;

use colored::*;

use crate::config::DISPLAYED_THIRD_PARTY_LIMIT;
use crate::models::AnalysisResult;

use super::{display_grade, RiskTier};

fn tier_colored(tier: RiskTier, text: &str) -> ColoredString {
    match tier {
        RiskTier::Low => text.green().bold(),
        RiskTier::Medium => text.yellow().bold(),
        RiskTier::High => text.blue().bold(),
    }
}

/// Renders the validation error message for empty input.
pub fn render_invalid_input_text() -> String {
    format!("{} Please enter a valid website URL.", "⚠️".yellow())
}

/// Renders the error message for a failed analysis.
pub fn render_error_text(message: &str) -> String {
    format!("{} {}", "❌ Error:".red().bold(), message)
}

/// Renders the result block for a completed analysis.
pub fn render_result_text(result: &AnalysisResult) -> String {
    let grade = display_grade(&result.privacy_grade);
    let tier = RiskTier::from_grade(grade);

    let mut out = String::new();

    if let Some(title) = result.page_title.as_deref().filter(|t| !t.is_empty()) {
        let _ = writeln!(out, "{}", title.bold());
    }
    let _ = writeln!(
        out,
        "{} {}  {}",
        tier.icon(),
        tier_colored(tier, grade),
        tier_colored(tier, &tier.label(grade))
    );
    if !result.analysis_summary.is_empty() {
        let _ = writeln!(out, "{}", result.analysis_summary);
    }
    if !result.examples.is_empty() {
        let _ = writeln!(out, "{}", result.examples.italic().dimmed());
    }
    let _ = writeln!(out, "  Cookies:             {}", result.cookies_found);
    let _ = writeln!(out, "  Third-party domains: {}", result.third_party_found);
    let _ = writeln!(out, "  Storage entries:     {}", result.storage_found);

    if !result.third_party_domains.is_empty() {
        let _ = writeln!(out, "{}", "3rd parties detected:".bold());
        for domain in result
            .third_party_domains
            .iter()
            .take(DISPLAYED_THIRD_PARTY_LIMIT)
        {
            let _ = writeln!(out, "  - {domain}");
        }
    }

    // Drop the trailing newline; panels are joined by the caller
    out.truncate(out.trim_end().len());
    out
}
