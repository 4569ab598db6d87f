//! Input validation for hex color strings.

use crate::error::{PaletteError, Result};

/// Check whether a string is a syntactically valid hex color.
///
/// Valid means `#` followed by exactly 3 or exactly 6 hex digits,
/// case-insensitive. The leading `#` is required; use
/// [`normalize_hex`] for user input that may omit it.
pub fn is_valid_hex(text: &str) -> bool {
    let Some(digits) = text.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Prefix a bare hex string with `#` if needed, validate, and lowercase.
pub fn normalize_hex(input: &str) -> Result<String> {
    let candidate = if input.starts_with('#') {
        input.to_string()
    } else {
        format!("#{input}")
    };

    if is_valid_hex(&candidate) {
        Ok(candidate.to_ascii_lowercase())
    } else {
        Err(PaletteError::InvalidColorFormat {
            input: input.to_string(),
        })
    }
}
