//! Error handling for the sanitization layer
//!
//! Every failure in this crate is returned as data. The messages are meant to be
//! shown to the end user as-is; the security variant never names the detector.

use serde::Serialize;
use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Enum representing the ways an input can be rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field missing or blank when mandatory
    #[error("This field is required")]
    Required,

    /// The sanitizer could not produce a well-formed value
    #[error("{0}")]
    InvalidFormat(String),

    /// Sanitized value is shorter or longer than the configured bounds
    #[error("{0}")]
    LengthViolation(String),

    /// Parsed number is outside the configured bounds
    #[error("{0}")]
    OutOfRange(String),

    /// A pattern detector matched on the raw or sanitized input.
    ///
    /// Never carries which detector fired.
    #[error("Input contains potentially dangerous content")]
    DangerousContent,

    /// Request body exceeds the configured byte threshold
    #[error("Request body too large: {actual} bytes exceeds the limit of {limit} bytes")]
    PayloadTooLarge { actual: usize, limit: usize },
}

impl ValidationError {
    /// Create an invalid-format error with a message
    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        ValidationError::InvalidFormat(message.into())
    }

    /// Create a length violation error with a message
    pub fn length<S: Into<String>>(message: S) -> Self {
        ValidationError::LengthViolation(message.into())
    }

    /// Returns true if this is a security-related error
    pub fn is_security_threat(&self) -> bool {
        matches!(self, ValidationError::DangerousContent)
    }

    /// Short stable name of the error kind, safe to log
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::Required => "required",
            ValidationError::InvalidFormat(_) => "invalid_format",
            ValidationError::LengthViolation(_) => "length_violation",
            ValidationError::OutOfRange(_) => "out_of_range",
            ValidationError::DangerousContent => "dangerous_content",
            ValidationError::PayloadTooLarge { .. } => "payload_too_large",
        }
    }
}

/// Validation error tied to the field it was raised for
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// The field where the error occurred
    pub field: String,
    /// User-facing error message
    pub message: String,
    /// Error kind, see [`ValidationError::kind`]
    pub kind: &'static str,
}

impl FieldError {
    /// Create a new field error
    pub fn new<S: Into<String>>(field: S, error: &ValidationError) -> Self {
        Self {
            field: field.into(),
            message: error.to_string(),
            kind: error.kind(),
        }
    }
}
