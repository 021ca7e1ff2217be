//! Security pattern detectors
//!
//! Heuristic screens for SQL injection and cross-site scripting shapes. These are
//! regex lists, not grammars: obfuscated payloads can slip through and ordinary prose
//! can trip them ("select a mentor"). They sit behind parameterized storage and
//! escaped output, they do not replace either.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // SQL Injection patterns
    static ref SQL_INJECTION_PATTERNS: Vec<Regex> = compile(&[
        r"(?i)\b(SELECT|INSERT|UPDATE|DELETE|DROP|CREATE|ALTER|EXEC|EXECUTE)\b",
        r"(?i)\bUNION\s+(ALL\s+)?SELECT\b",
        r"(?i)\b(OR|AND)\s+\d+\s*=\s*\d+",
        r"(?i)\b(OR|AND)\s+'[^']*'\s*=\s*'[^']*'",
        r#"(?i)['"]\s*(OR|AND)\s*['"\d]"#,
        r#"['";]\s*(--|#|/\*)"#,
        r"(?s)/\*.*?\*/",
        r#"['"]\s*[+%*|]+\s*['"]"#,
    ]);

    // XSS patterns
    static ref XSS_PATTERNS: Vec<Regex> = compile(&[
        r"(?is)<script\b[^>]*>.*?</script\s*>",
        r"(?i)<script\b",
        r"(?i)javascript\s*:",
        r"(?i)\bon\w+\s*=",
        r"(?i)<iframe\b",
        r"(?i)<object\b",
        r"(?i)<embed\b",
        r"(?i)data:text/html",
    ]);
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
}

/// Check whether a string has the shape of a SQL injection attempt
pub fn looks_like_sql_injection(input: &str) -> bool {
    SQL_INJECTION_PATTERNS.iter().any(|re| re.is_match(input))
}

/// Check whether a string has the shape of a cross-site scripting attempt
pub fn looks_like_xss(input: &str) -> bool {
    XSS_PATTERNS.iter().any(|re| re.is_match(input))
}

/// Either detector fired
pub fn is_dangerous(input: &str) -> bool {
    looks_like_sql_injection(input) || looks_like_xss(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1 OR 1=1" ; "numeric tautology")]
    #[test_case("' OR '1'='1" ; "quoted tautology")]
    #[test_case("admin'--" ; "quote then comment")]
    #[test_case("x'; DROP TABLE users; --" ; "stacked statement")]
    #[test_case("1 UNION SELECT password FROM users" ; "union select")]
    #[test_case("name /* hidden */" ; "comment block")]
    #[test_case("'a' + 'b'" ; "quoted concatenation")]
    #[test_case("exec xp_cmdshell" ; "exec keyword")]
    fn test_sql_injection_detected(input: &str) {
        assert!(looks_like_sql_injection(input));
    }

    #[test_case("normal text" ; "prose")]
    #[test_case("John O'Brien-Smith" ; "apostrophe name")]
    #[test_case("Marie D'Or" ; "apostrophe before or")]
    #[test_case("foo+bar@example.com" ; "plus address")]
    #[test_case("+256 (700) 123-456" ; "phone")]
    #[test_case("50% off, 2 * 3 = 6" ; "arithmetic")]
    #[test_case("the selection committee" ; "keyword prefix")]
    fn test_sql_injection_clean(input: &str) {
        assert!(!looks_like_sql_injection(input));
    }

    #[test]
    fn test_sql_keyword_false_positive() {
        // Accepted trade-off: legitimate prose trips the keyword list.
        assert!(looks_like_sql_injection("Please select a mentor"));
    }

    #[test_case("<script>alert(1)</script>" ; "script block")]
    #[test_case("<SCRIPT type=\"text/javascript\">\nx()\n</SCRIPT >" ; "multiline script")]
    #[test_case("<script src=//evil.example>" ; "unclosed script")]
    #[test_case("javascript:alert(1)" ; "javascript uri")]
    #[test_case("<img src=x onerror=alert(1)>" ; "event handler")]
    #[test_case("<iframe src=x>" ; "iframe")]
    #[test_case("<object data=x>" ; "object")]
    #[test_case("<embed src=x>" ; "embed")]
    #[test_case("data:text/html;base64,PHNjcmlwdD4=" ; "data html uri")]
    fn test_xss_detected(input: &str) {
        assert!(looks_like_xss(input));
    }

    #[test_case("normal text" ; "prose")]
    #[test_case("I am passionate about questions = answers" ; "on inside word")]
    #[test_case("Click on the button" ; "on as word")]
    #[test_case("a < b and c > d" ; "comparison")]
    fn test_xss_clean(input: &str) {
        assert!(!looks_like_xss(input));
    }

    #[test]
    fn test_is_dangerous() {
        assert!(is_dangerous("<script>alert(1)</script>"));
        assert!(is_dangerous("1 OR 1=1"));
        assert!(!is_dangerous("Hello, this is a normal message!"));
    }
}
