//! Email and phone sanitizers
//!
//! Both work from a closed character set, so they filter characters directly instead
//! of matching attack patterns.

use super::string::{bound_input, trim_and_truncate};
use crate::config::MAX_EMAIL_LENGTH;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Check an already-normalized address against the accepted email shape
pub fn is_valid_email(s: &str) -> bool {
    s.chars().count() <= MAX_EMAIL_LENGTH && EMAIL_REGEX.is_match(s)
}

/// Normalize an email address.
///
/// Lowercases and removes whitespace and control characters. Returns an empty
/// string when the result is not a plausible address or is longer than 254 chars.
pub fn sanitize_email(input: &str) -> String {
    let normalized: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .flat_map(char::to_lowercase)
        .collect();

    if is_valid_email(&normalized) {
        normalized
    } else {
        String::new()
    }
}

/// Filter a phone number down to digits, spaces, `-`, `(`, `)` and a leading `+`
pub fn sanitize_phone(input: &str, max_length: usize) -> String {
    let mut kept = String::with_capacity(input.len());
    for c in bound_input(input, max_length).chars() {
        let keep = match c {
            '0'..='9' | ' ' | '-' | '(' | ')' => true,
            // Only while nothing but spaces precede it
            '+' => kept.trim_start().is_empty(),
            _ => false,
        };
        if keep {
            kept.push(c);
        }
    }
    trim_and_truncate(&kept, max_length)
}

/// Number of ASCII digits in a string
pub fn count_digits(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}
