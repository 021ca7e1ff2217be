//! HTTP helpers for request handlers
//!
//! A fixed set of response security headers, and a size guard that runs on the
//! request body before any field is sanitized.

use ::http::header::{HeaderName, HeaderValue};
use ::http::{HeaderMap, Response};
use serde_json::Value;

use crate::errors::{ValidationError, ValidationResult};
use crate::guard::SecureInput;

/// Headers stamped on every response, whatever the outcome
pub const SECURITY_HEADERS: [(&str, &str); 5] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("x-xss-protection", "1; mode=block"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    ("content-security-policy", "default-src 'self'"),
];

/// Insert the security headers, replacing any existing values
pub fn apply_security_headers(headers: &mut HeaderMap) {
    for (name, value) in SECURITY_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }
}

/// Return `response` with the security headers applied
pub fn with_security_headers<B>(mut response: Response<B>) -> Response<B> {
    apply_security_headers(response.headers_mut());
    response
}

/// Reject a parsed body whose serialized size exceeds `limit` bytes.
///
/// Returns the serialized size on success.
pub fn check_body_size(body: &Value, limit: usize) -> ValidationResult<usize> {
    let size = serde_json::to_vec(body)
        .map(|bytes| bytes.len())
        .map_err(|_| ValidationError::invalid_format("Invalid JSON body"))?;
    ensure_within(size, limit)?;
    Ok(size)
}

/// Size-check raw bytes, then parse them as JSON
pub fn parse_json_body(raw: &[u8], limit: usize) -> ValidationResult<Value> {
    ensure_within(raw.len(), limit)?;
    serde_json::from_slice(raw).map_err(|e| {
        log::debug!("Rejected request body: {}", e);
        ValidationError::invalid_format("Invalid JSON body")
    })
}

fn ensure_within(actual: usize, limit: usize) -> ValidationResult<()> {
    if actual > limit {
        log::warn!("Request body of {} bytes exceeds limit of {} bytes", actual, limit);
        return Err(ValidationError::PayloadTooLarge { actual, limit });
    }
    Ok(())
}

impl SecureInput {
    /// [`check_body_size`] with the configured limit
    pub fn check_body_size(&self, body: &Value) -> ValidationResult<usize> {
        check_body_size(body, self.config().max_body_bytes)
    }

    /// [`parse_json_body`] with the configured limit
    pub fn parse_json_body(&self, raw: &[u8]) -> ValidationResult<Value> {
        parse_json_body(raw, self.config().max_body_bytes)
    }
}
