//! URL sanitizer
//!
//! Strips script-capable schemes. It does not check that the URL is otherwise well
//! formed; `secure_url_input` does that with the `url` crate.

use super::html::strip_until_stable;
use super::string::{bound_input, trim_and_truncate};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DANGEROUS_SCHEME_REGEX: Regex =
        Regex::new(r"(?i)(javascript|vbscript)\s*:|\bdata\s*:").unwrap();
}

/// Remove `javascript:`, `data:` and `vbscript:` schemes and null bytes, then cap length.
///
/// An empty result means nothing usable was left.
pub fn sanitize_url(input: &str, max_length: usize) -> String {
    let cleaned = strip_until_stable(bound_input(input, max_length).replace('\0', ""), |s| {
        DANGEROUS_SCHEME_REGEX.replace_all(s, "").into_owned()
    });
    trim_and_truncate(&cleaned, max_length)
}
