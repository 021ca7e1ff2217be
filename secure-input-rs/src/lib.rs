//! # Secure Input
//!
//! Type-aware sanitization and injection screening for untrusted form fields
//! (names, emails, phone numbers, URLs, free text, numbers) before they are stored or
//! echoed back.
//!
//! ## Features
//!
//! - One sanitizer per [`InputType`], each idempotent and length-bounded
//! - Heuristic SQL-injection and XSS detectors
//! - A facade that sanitizes, validates, then re-scans the sanitized value
//! - Typed wrappers for the common fields, with a raw-input screen first
//! - Multi-field form validation with a ready-made 400 body
//! - Response security headers and a request-size guard
//!
//! The detectors are a second line of defense behind parameterized queries and
//! escaped output, not a security boundary of their own.
//!
//! ```
//! use secure_input::{validate_and_sanitize_input, InputType, ValidationOptions};
//!
//! let options = ValidationOptions::new(InputType::Name).required();
//! let result = validate_and_sanitize_input("John123 O'Brien-Smith!!", &options);
//! assert!(result.is_valid());
//! ```

mod config;
mod errors;
mod form;
mod guard;
mod input;
mod wrappers;
pub mod http;
pub mod sanitizers;
pub mod validators;

pub use config::{
    SanitizerConfig, DEFAULT_CONTENT_MAX_LENGTH, DEFAULT_MAX_BODY_BYTES, DEFAULT_NAME_MAX_LENGTH,
    DEFAULT_PHONE_MAX_LENGTH, DEFAULT_TEXT_MAX_LENGTH, DEFAULT_URL_MAX_LENGTH, MAX_EMAIL_LENGTH,
};
pub use errors::{FieldError, ValidationError, ValidationResult};
pub use form::{FieldSpec, FormReport};
pub use guard::SecureInput;
pub use input::{InputType, RawInput, SanitizationResult, SanitizedValue, ValidationOptions};
pub use validators::{looks_like_sql_injection, looks_like_xss};
pub use wrappers::{EmailInput, NumberOptions, SecureField};

use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT_GUARD: SecureInput = SecureInput::default();
}

/// Re-export commonly used items for convenience
pub mod prelude {
    pub use crate::errors::{ValidationError, ValidationResult};
    pub use crate::guard::SecureInput;
    pub use crate::input::{InputType, RawInput, SanitizationResult, SanitizedValue, ValidationOptions};
    pub use crate::sanitizers;
    pub use crate::validators;
    pub use crate::wrappers::{EmailInput, NumberOptions, SecureField};
    pub use crate::SanitizerConfig;
}

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The shared default-config instance used by the free functions
pub fn default_guard() -> &'static SecureInput {
    &DEFAULT_GUARD
}

/// Validate and sanitize one value with the default configuration
pub fn validate_and_sanitize_input<I: Into<RawInput>>(
    input: I,
    options: &ValidationOptions,
) -> SanitizationResult {
    DEFAULT_GUARD.validate_and_sanitize(input, options)
}

/// See [`SecureInput::secure_email`]
pub fn secure_email_input<I: Into<RawInput>>(raw: I) -> EmailInput {
    DEFAULT_GUARD.secure_email(raw)
}

/// See [`SecureInput::secure_name`]
pub fn secure_name_input<I: Into<RawInput>>(raw: I, max_length: usize) -> SecureField<String> {
    DEFAULT_GUARD.secure_name(raw, max_length)
}

/// See [`SecureInput::secure_text`]
pub fn secure_text_input<I: Into<RawInput>>(
    raw: I,
    max_length: usize,
    required: bool,
) -> SecureField<String> {
    DEFAULT_GUARD.secure_text(raw, max_length, required)
}

/// See [`SecureInput::secure_phone`]
pub fn secure_phone_input<I: Into<RawInput>>(raw: I) -> SecureField<String> {
    DEFAULT_GUARD.secure_phone(raw)
}

/// See [`SecureInput::secure_number`]
pub fn secure_number_input<I: Into<RawInput>>(raw: I, options: NumberOptions) -> SecureField<f64> {
    DEFAULT_GUARD.secure_number(raw, options)
}

/// See [`SecureInput::secure_url`]
pub fn secure_url_input<I: Into<RawInput>>(raw: I, required: bool) -> SecureField<String> {
    DEFAULT_GUARD.secure_url(raw, required)
}

#[cfg(test)]
mod tests;
