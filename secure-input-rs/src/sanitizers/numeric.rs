//! Numeric sanitizer
//!
//! Strict coercion: the whole trimmed string must be a plain decimal number.
//! Stray characters are rejected rather than stripped, so `"12abc34"` never
//! silently becomes `1234`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::DEFAULT_NUMBER_MAX_LENGTH;

lazy_static! {
    static ref NUMBER_REGEX: Regex = Regex::new(r"^-?(?:\d+(?:\.\d*)?|\.\d+)$").unwrap();
}

/// Parse a numeric string, or `None` if it is not a finite plain decimal
pub fn sanitize_number(input: &str) -> Option<f64> {
    sanitize_number_bounded(input, DEFAULT_NUMBER_MAX_LENGTH)
}

/// Like [`sanitize_number`] with an explicit cap on the string length
pub fn sanitize_number_bounded(input: &str, max_length: usize) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.len() > max_length || !NUMBER_REGEX.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().and_then(sanitize_number_value)
}

/// Accept an already-numeric value if it is finite
pub fn sanitize_number_value(value: f64) -> Option<f64> {
    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}
