//! Validator functions
//!
//! Pattern detectors and the structural checks applied after sanitization.

pub mod security;
pub mod structural;

pub use security::*;
pub use structural::*;

/// Prefix of `input` that a sanitizer bounded at `max_chars` could keep.
///
/// Scanning only this window keeps detector cost proportional to the field's size
/// bound instead of to whatever the client sent.
pub fn scan_window(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_window() {
        assert_eq!(scan_window("hello", 10), "hello");
        assert_eq!(scan_window("hello", 3), "hel");
        assert_eq!(scan_window("héllo", 2), "hé");
        assert_eq!(scan_window("", 0), "");
    }
}
