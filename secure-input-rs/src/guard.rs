//! Secure input facade
//!
//! [`SecureInput`] composes the sanitizers, structural validators and pattern
//! detectors into one verdict per field:
//!
//! 1. blank and required: `Required`
//! 2. blank and optional: success with an empty string, nothing else runs
//! 3. type check of the raw value
//! 4. type-specific sanitizer
//! 5. structural checks on the sanitized value
//! 6. unless `allow_html`, both detectors on the sanitized value
//! 7. success
//!
//! The scan in step 6 looks at the sanitized output, so a sanitizer that misses
//! an attack shape is still caught, and the allow-lists still bound what an
//! obfuscated payload can carry.

use crate::config::SanitizerConfig;
use crate::errors::{ValidationError, ValidationResult};
use crate::input::{InputType, RawInput, SanitizationResult, SanitizedValue, ValidationOptions};
use crate::sanitizers;
use crate::validators::{self, structural};

/// Validation facade holding the configured bounds. Cheap to share; holds no
/// mutable state.
#[derive(Debug, Clone, Default)]
pub struct SecureInput {
    config: SanitizerConfig,
}

impl SecureInput {
    pub fn new(config: SanitizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SanitizerConfig {
        &self.config
    }

    /// Effective maximum length for a field
    pub fn max_length(&self, options: &ValidationOptions) -> usize {
        options
            .max_length
            .unwrap_or_else(|| self.config.max_length_for(options.input_type))
    }

    /// Validate and sanitize one untrusted value
    pub fn validate_and_sanitize<I>(&self, input: I, options: &ValidationOptions) -> SanitizationResult
    where
        I: Into<RawInput>,
    {
        let input = input.into();
        let result = self.run(&input, options);

        if let Err(err) = &result {
            if err.is_security_threat() {
                log::warn!("Rejected {} input: dangerous content detected", options.input_type);
            } else {
                log::debug!("Rejected {} input: {}", options.input_type, err.kind());
            }
        }

        result.into()
    }

    fn run(&self, input: &RawInput, options: &ValidationOptions) -> ValidationResult<SanitizedValue> {
        if input.is_blank() {
            return if options.required {
                Err(ValidationError::Required)
            } else {
                Ok(SanitizedValue::Text(String::new()))
            };
        }

        let sanitized = self.sanitize(input, options)?;

        // The email sanitizer never truncates, so its bound is checked here instead
        let mut structural_options = options.clone();
        if options.input_type == InputType::Email {
            structural_options.max_length = Some(self.max_length(options));
        }
        structural::check(&sanitized, &structural_options)?;

        if !options.allow_html {
            if let SanitizedValue::Text(s) = &sanitized {
                if validators::is_dangerous(s) {
                    return Err(ValidationError::DangerousContent);
                }
            }
        }

        Ok(sanitized)
    }

    /// Type check and dispatch to the sanitizer for `options.input_type`
    fn sanitize(&self, input: &RawInput, options: &ValidationOptions) -> ValidationResult<SanitizedValue> {
        let raw = match input {
            RawInput::Text(s) => s.as_str(),
            RawInput::Number(n) if options.input_type == InputType::Number => {
                return sanitizers::sanitize_number_value(*n)
                    .map(SanitizedValue::Number)
                    .ok_or_else(invalid_number);
            }
            _ => return Err(ValidationError::invalid_format("Invalid input type")),
        };

        let max = self.max_length(options);
        let sanitized = match options.input_type {
            InputType::Text => sanitizers::sanitize_text(raw, max),
            InputType::Name => sanitizers::sanitize_name(raw, max),
            InputType::Phone => sanitizers::sanitize_phone(raw, max),
            InputType::Content => sanitizers::sanitize_content(raw, max),
            InputType::Email => {
                let email = sanitizers::sanitize_email(raw);
                if email.is_empty() {
                    return Err(ValidationError::invalid_format("Invalid email address"));
                }
                email
            }
            InputType::Url => {
                let url = sanitizers::sanitize_url(raw, max);
                if url.is_empty() {
                    return Err(ValidationError::invalid_format("Invalid URL"));
                }
                url
            }
            InputType::Number => {
                return sanitizers::sanitize_number_bounded(raw, self.config.number_max_length)
                    .map(SanitizedValue::Number)
                    .ok_or_else(invalid_number);
            }
        };

        Ok(SanitizedValue::Text(sanitized))
    }
}

fn invalid_number() -> ValidationError {
    ValidationError::invalid_format("Must be a valid number")
}
