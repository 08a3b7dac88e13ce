//! Website input validation.

/// Normalizes a raw website input.
///
/// Trims surrounding whitespace and rejects inputs with nothing left. The
/// trimmed value is otherwise sent to the analyzer verbatim; the service is
/// the authority on what constitutes an analyzable address.
///
/// # Arguments
///
/// * `raw` - The website string as entered by the user
///
/// # Returns
///
/// `Some(trimmed)` if anything remains after trimming, `None` otherwise.
pub fn normalize_website(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
