//! HTML sanitization utilities
//!
//! Regex-based markup stripping and the `content` sanitizer used for long
//! free-text fields. This is not an HTML parser: it only removes the shapes that
//! carry script, and leaves the rest to output escaping.

use super::string::{bound_input, normalize_line_endings, trim_and_truncate};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any tag-like `<...>` run
    pub(crate) static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();

    /// A whole script element, body included
    pub(crate) static ref SCRIPT_BLOCK_REGEX: Regex =
        Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap();

    /// `javascript:` scheme, tolerant of spaces before the colon
    pub(crate) static ref JS_PROTOCOL_REGEX: Regex = Regex::new(r"(?i)javascript\s*:").unwrap();

    /// Inline handler assignment such as `onclick=`
    pub(crate) static ref EVENT_HANDLER_REGEX: Regex = Regex::new(r"(?i)\bon\w+\s*=").unwrap();

    /// Inline handler attribute together with its value
    static ref EVENT_HANDLER_ATTR_REGEX: Regex =
        Regex::new(r#"(?i)\bon\w+\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]*)"#).unwrap();
}

/// Apply `step` until the output stops changing.
///
/// Every step used here only removes text, so the loop ends. Repeating closes the
/// gap where removing one token splices together a new one (`javajavascript:script:`).
pub(crate) fn strip_until_stable<F>(input: String, step: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut current = input;
    loop {
        let next = step(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Remove all HTML tags from the input string
pub fn strip_html_tags(input: &str) -> String {
    TAG_REGEX.replace_all(input, "").into_owned()
}

/// Remove `<script>` elements including their bodies
pub fn strip_script_blocks(input: &str) -> String {
    SCRIPT_BLOCK_REGEX.replace_all(input, "").into_owned()
}

/// Remove inline event-handler attributes and their values
pub fn strip_event_handlers(input: &str) -> String {
    EVENT_HANDLER_ATTR_REGEX.replace_all(input, "").into_owned()
}

/// Free-text content sanitizer.
///
/// Unlike `text`, ordinary markup survives; only script blocks, handler attributes
/// and `javascript:` are removed.
pub fn sanitize_content(input: &str, max_length: usize) -> String {
    let cleaned = normalize_line_endings(bound_input(input, max_length)).replace('\0', "");
    let cleaned = strip_until_stable(cleaned, |s| {
        let s = strip_script_blocks(s);
        let s = strip_event_handlers(&s);
        JS_PROTOCOL_REGEX.replace_all(&s, "").into_owned()
    });
    trim_and_truncate(&cleaned, max_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_tags() {
        assert_eq!(strip_html_tags("<p>Hello <b>World</b></p>"), "Hello World");
        assert_eq!(strip_html_tags("a < b"), "a < b");
    }

    #[test]
    fn test_strip_script_blocks() {
        let input = "Before<script type=\"text/javascript\">\nsteal();\n</script>After";
        assert_eq!(strip_script_blocks(input), "BeforeAfter");

        let two = "<script>a()</script>keep<SCRIPT>b()</SCRIPT>";
        assert_eq!(strip_script_blocks(two), "keep");
    }

    #[test]
    fn test_strip_event_handlers() {
        assert_eq!(
            strip_event_handlers(r#"<img src="x" onerror="alert(1)">"#),
            r#"<img src="x" >"#
        );
        assert_eq!(strip_event_handlers("<p onclick='x()'>hi</p>"), "<p >hi</p>");
        assert_eq!(strip_event_handlers("<b onmouseover=go>t</b>"), "<b >t</b>");
    }

    #[test]
    fn test_sanitize_content_keeps_markup() {
        let input = "  <p>I want to <em>learn</em> to code.</p>\r\n  ";
        assert_eq!(
            sanitize_content(input, 50_000),
            "<p>I want to <em>learn</em> to code.</p>"
        );
    }

    #[test]
    fn test_sanitize_content_removes_script() {
        let input = "Hello<script>alert('x')</script> <a href=\"javascript:go()\">link</a>\0";
        assert_eq!(
            sanitize_content(input, 50_000),
            "Hello <a href=\"go()\">link</a>"
        );
    }

    #[test]
    fn test_sanitize_content_nested_script() {
        let input = "<scr<script>x</script>ipt>alert(1)</script>";
        assert_eq!(sanitize_content(input, 50_000), "");
    }

    #[test]
    fn test_sanitize_content_truncates() {
        let input = "a".repeat(60_000);
        assert_eq!(sanitize_content(&input, 50_000).len(), 50_000);
    }
}
