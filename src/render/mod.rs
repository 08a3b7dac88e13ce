//! Result panel rendering.
//!
//! This module maps privacy grades to presentation risk tiers and renders
//! analysis results, errors, and the loading indicator as either HTML
//! fragments (the result panel markup contract) or colored terminal text.

mod html;
mod text;

// Re-export public API
pub use html::{
    render_error_html, render_invalid_input_html, render_loading_html, render_result_html,
};
pub use text::{render_error_text, render_invalid_input_text, render_result_text};

/// Presentation tier derived from a privacy grade.
///
/// Derivation is by exact string match: "A+" and "A" are low risk, "B" is
/// medium, everything else (including unknown grades) is high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    /// Little or no tracking observed
    Low,
    /// Minimal tracking, typical for functional or analytics purposes
    Medium,
    /// Substantial tracking, or a grade this client does not recognize
    High,
}

impl RiskTier {
    /// Derives the tier for a grade string.
    pub fn from_grade(grade: &str) -> Self {
        match grade {
            "A+" | "A" => RiskTier::Low,
            "B" => RiskTier::Medium,
            _ => RiskTier::High,
        }
    }

    /// CSS class used for this tier in the HTML panel.
    pub fn css_class(&self) -> &'static str {
        match self {
            RiskTier::Low => "risk-low",
            RiskTier::Medium => "risk-medium",
            RiskTier::High => "risk-high",
        }
    }

    /// Icon shown next to the tier label.
    pub fn icon(&self) -> &'static str {
        match self {
            RiskTier::Low => "🟢",
            RiskTier::Medium => "🟡",
            RiskTier::High => "🔵",
        }
    }

    /// Tier label text; the high tier names the literal grade.
    pub fn label(&self, grade: &str) -> String {
        match self {
            RiskTier::Low => "A+ Secure".to_string(),
            RiskTier::Medium => "B Moderate".to_string(),
            RiskTier::High => format!("{grade} Risk"),
        }
    }
}

/// Grade shown to the user.
///
/// The service occasionally omits the grade; an empty value falls back to
/// the "C" risk label.
pub fn display_grade(grade: &str) -> &str {
    if grade.trim().is_empty() {
        "C"
    } else {
        grade
    }
}
