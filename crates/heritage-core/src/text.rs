//! Text normalization for raw feed fields.

/// Value substituted for any missing or empty field.
pub const PLACEHOLDER: &str = "-";

/// Removes carriage returns, newlines and tabs, trims surrounding whitespace,
/// and falls back to [`PLACEHOLDER`] when nothing is left.
#[must_use]
pub fn clean_text(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return PLACEHOLDER.to_string();
    };

    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n' | '\t'))
        .collect();
    let trimmed = stripped.trim();

    if trimmed.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Returns the value verbatim, or [`PLACEHOLDER`] when absent or empty.
#[must_use]
pub fn or_placeholder(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}
