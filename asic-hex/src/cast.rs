//! Casting raw environment strings into typed values.

/// Parses the usual truthy/falsy spellings, case-insensitively.
///
/// Returns `None` for anything else so the caller can decide on a fallback.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "t" | "true" | "on" | "1" => Some(true),
        "n" | "no" | "f" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Splits a comma-separated list, trimming entries and dropping empty ones.
pub fn parse_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
}
