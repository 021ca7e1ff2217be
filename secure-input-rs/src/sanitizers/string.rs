//! String sanitization utilities
//!
//! Shared helpers plus the `text` and `name` sanitizers.

use super::html::{strip_html_tags, strip_until_stable, EVENT_HANDLER_REGEX, JS_PROTOCOL_REGEX};
use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // C0 controls and DEL, keeping tab and newline
    static ref CONTROL_CHARS_REGEX: Regex = Regex::new(r"[\x00-\x08\x0B-\x1F\x7F]").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

/// Remove control characters except newline and tab
pub fn remove_control_chars(input: &str) -> String {
    CONTROL_CHARS_REGEX.replace_all(input, "").into_owned()
}

/// Normalize line endings to LF only
pub fn normalize_line_endings(input: &str) -> String {
    // CRLF first so it does not turn into two newlines
    input.replace("\r\n", "\n").replace('\r', "\n")
}

/// Collapse runs of whitespace into a single space
pub fn collapse_whitespace(input: &str) -> String {
    WHITESPACE_REGEX.replace_all(input, " ").into_owned()
}

/// Keep at most `max_chars` characters
pub fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

/// How much raw input a sanitizer looks at, as a multiple of its output cap
const INPUT_BOUND_FACTOR: usize = 4;

/// Prefix of a raw value that a sanitizer capped at `max_chars` will process.
///
/// Applied before any regex pass so the work per field is bounded by the field's
/// cap rather than by what the client sent.
pub(crate) fn bound_input(input: &str, max_chars: usize) -> &str {
    truncate_chars(input, max_chars.saturating_mul(INPUT_BOUND_FACTOR))
}

/// Trim, cap, then trim the tail the cap may have exposed.
///
/// Running this twice gives the same string, which keeps the sanitizers idempotent.
pub fn trim_and_truncate(input: &str, max_chars: usize) -> String {
    truncate_chars(input.trim(), max_chars).trim_end().to_string()
}

/// General-purpose text sanitizer.
///
/// Strips control characters and markup, neutralizes `javascript:` and inline
/// handler assignments, then trims and caps the length.
pub fn sanitize_text(input: &str, max_length: usize) -> String {
    let cleaned = remove_control_chars(&normalize_line_endings(bound_input(input, max_length)));
    let cleaned = strip_until_stable(cleaned, |s| {
        let s = strip_html_tags(s);
        let s = JS_PROTOCOL_REGEX.replace_all(&s, "").into_owned();
        EVENT_HANDLER_REGEX.replace_all(&s, "").into_owned()
    });
    trim_and_truncate(&cleaned, max_length)
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || (('\u{00C0}'..='\u{017F}').contains(&c) && c != '\u{00D7}' && c != '\u{00F7}')
        || c.is_whitespace()
        || c == '-'
        || c == '\''
}

/// Person-name sanitizer.
///
/// Keeps Latin letters (ASCII, Latin-1 Supplement, Latin Extended-A), spaces,
/// hyphens and apostrophes. Anything else is dropped without error.
pub fn sanitize_name(input: &str, max_length: usize) -> String {
    let kept: String = bound_input(input, max_length)
        .nfc().filter(|c| is_name_char(*c)).collect();
    trim_and_truncate(&collapse_whitespace(&kept), max_length)
}
