//! Diagnostic ID constants.
//!
//! Use these instead of string literals to get compile-time typo detection
//! and IDE autocomplete.

/// JSON syntax error remaining after comment stripping and trailing-comma
/// cleanup.
pub const JSON_SYNTAX: &str = "TXT1001";

/// Settings file could not be read as JSONC.
pub const SETTINGS_INVALID: &str = "TXT1002";

/// Returns the human-readable explanation for a diagnostic code, if known.
pub fn explain(id: &str) -> Option<&'static str> {
    match id {
        JSON_SYNTAX => Some(
            "The selected text is not valid JSON even after // and /* */ \
             comments were stripped and trailing commas removed. The reported \
             position points into the original text, with up to 40 characters \
             of context on each side.",
        ),
        SETTINGS_INVALID => Some(
            "The settings file could not be parsed. Settings files are JSONC: \
             standard JSON plus // and /* */ comments and trailing commas.",
        ),
        _ => None,
    }
}
