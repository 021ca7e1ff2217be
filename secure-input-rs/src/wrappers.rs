//! Typed secure wrappers
//!
//! Domain-named entry points for the common form fields. Each one screens the raw
//! value before sanitizing (so a probing payload is rejected rather than quietly
//! stripped), runs the facade with fixed options, applies the field's own
//! normalization, and screens the final value again.

use ::url::Url;

use crate::errors::{ValidationError, ValidationResult};
use crate::guard::SecureInput;
use crate::input::{InputType, RawInput, SanitizedValue, ValidationOptions};
use crate::sanitizers::{count_digits, is_valid_email};
use crate::validators::{is_dangerous, scan_window};

/// Result of [`SecureInput::secure_email`]
#[derive(Debug, Clone, PartialEq)]
pub struct EmailInput {
    pub valid: bool,
    pub normalized: Option<String>,
    pub error: Option<ValidationError>,
}

/// Result of the other typed wrappers
#[derive(Debug, Clone, PartialEq)]
pub struct SecureField<T> {
    pub valid: bool,
    /// `None` on failure, and for optional fields that were omitted
    pub sanitized: Option<T>,
    pub error: Option<ValidationError>,
}

impl<T> SecureField<T> {
    fn omitted() -> Self {
        Self {
            valid: true,
            sanitized: None,
            error: None,
        }
    }

    /// User-facing error message, if the value was rejected
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

impl<T> From<ValidationResult<T>> for SecureField<T> {
    fn from(result: ValidationResult<T>) -> Self {
        match result {
            Ok(value) => Self {
                valid: true,
                sanitized: Some(value),
                error: None,
            },
            Err(err) => Self {
                valid: false,
                sanitized: None,
                error: Some(err),
            },
        }
    }
}

impl From<ValidationResult<String>> for EmailInput {
    fn from(result: ValidationResult<String>) -> Self {
        match result {
            Ok(value) => Self {
                valid: true,
                normalized: Some(value),
                error: None,
            },
            Err(err) => Self {
                valid: false,
                normalized: None,
                error: Some(err),
            },
        }
    }
}

/// Options for [`SecureInput::secure_number`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberOptions {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub required: bool,
}

fn screen(value: &str) -> ValidationResult<()> {
    if is_dangerous(value) {
        Err(ValidationError::DangerousContent)
    } else {
        Ok(())
    }
}

impl SecureInput {
    /// Screen the part of a raw value that could survive sanitization
    fn prescreen(&self, raw: &RawInput, options: &ValidationOptions) -> ValidationResult<()> {
        match raw.as_text() {
            Some(text) => screen(scan_window(text, self.max_length(options))),
            None => Ok(()),
        }
    }

    fn sanitized_text(&self, raw: &RawInput, options: &ValidationOptions) -> ValidationResult<String> {
        self.prescreen(raw, options)?;
        let value = self.validate_and_sanitize(raw.clone(), options).into_result()?;
        let text = value
            .into_text()
            .ok_or_else(|| ValidationError::invalid_format("Invalid input type"))?;
        screen(&text)?;
        Ok(text)
    }

    /// Required email address, lowercased and stripped of whitespace
    pub fn secure_email<I: Into<RawInput>>(&self, raw: I) -> EmailInput {
        let raw = raw.into();
        let options = ValidationOptions::new(InputType::Email).required();

        let result = self.sanitized_text(&raw, &options).and_then(|email| {
            let normalized = email.trim().to_string();
            if is_valid_email(&normalized) {
                Ok(normalized)
            } else {
                Err(ValidationError::invalid_format("Invalid email address"))
            }
        });
        result.into()
    }

    /// Required person name of at least `name_min_length` letters.
    ///
    /// Hyphens, apostrophes and spaces are kept but do not count toward the minimum.
    pub fn secure_name<I: Into<RawInput>>(&self, raw: I, max_length: usize) -> SecureField<String> {
        let raw = raw.into();
        let options = ValidationOptions::new(InputType::Name)
            .required()
            .max_length(max_length);
        let min_letters = self.config().name_min_length;

        let result = self.sanitized_text(&raw, &options).and_then(|name| {
            let letters = name.chars().filter(|c| c.is_alphabetic()).count();
            if letters < min_letters {
                return Err(ValidationError::length(format!(
                    "Must be at least {} characters",
                    min_letters
                )));
            }
            Ok(name)
        });
        result.into()
    }

    /// Short text such as a school or city name
    pub fn secure_text<I: Into<RawInput>>(
        &self,
        raw: I,
        max_length: usize,
        required: bool,
    ) -> SecureField<String> {
        let raw = raw.into();
        let options = ValidationOptions::new(InputType::Text)
            .with_required(required)
            .max_length(max_length);

        self.sanitized_text(&raw, &options).into()
    }

    /// Optional phone number; `sanitized` is `None` when omitted
    pub fn secure_phone<I: Into<RawInput>>(&self, raw: I) -> SecureField<String> {
        let raw = raw.into();
        if raw.is_blank() {
            return SecureField::omitted();
        }

        let options = ValidationOptions::new(InputType::Phone);
        let (min_digits, max_digits) = (self.config().phone_min_digits, self.config().phone_max_digits);

        let result = self.sanitized_text(&raw, &options).and_then(|phone| {
            let digits = count_digits(&phone);
            if (min_digits..=max_digits).contains(&digits) {
                Ok(phone)
            } else {
                Err(ValidationError::invalid_format(format!(
                    "Phone number must contain between {} and {} digits",
                    min_digits, max_digits
                )))
            }
        });
        result.into()
    }

    /// Number from a string or JSON number, with optional bounds
    pub fn secure_number<I: Into<RawInput>>(&self, raw: I, number: NumberOptions) -> SecureField<f64> {
        let raw = raw.into();
        if raw.is_blank() && !number.required {
            return SecureField::omitted();
        }

        let mut options = ValidationOptions::new(InputType::Number).with_required(number.required);
        options.min = number.min;
        options.max = number.max;

        let result = self.prescreen(&raw, &options).and_then(|()| {
            let value = self.validate_and_sanitize(raw.clone(), &options).into_result()?;
            match value {
                SanitizedValue::Number(n) => {
                    screen(&n.to_string())?;
                    Ok(n)
                }
                SanitizedValue::Text(_) => Err(ValidationError::invalid_format("Must be a valid number")),
            }
        });
        result.into()
    }

    /// Web link that must be an absolute `http` or `https` URL
    pub fn secure_url<I: Into<RawInput>>(&self, raw: I, required: bool) -> SecureField<String> {
        let raw = raw.into();
        if raw.is_blank() && !required {
            return SecureField::omitted();
        }

        let options = ValidationOptions::new(InputType::Url).with_required(required);
        let result = self.sanitized_text(&raw, &options).and_then(|link| {
            let parsed = Url::parse(&link)
                .map_err(|_| ValidationError::invalid_format("Invalid URL"))?;
            let web = matches!(parsed.scheme(), "http" | "https");
            if !web || parsed.host_str().is_none() {
                return Err(ValidationError::invalid_format(
                    "URL must start with http:// or https://",
                ));
            }
            Ok(link)
        });
        result.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> SecureInput {
        SecureInput::default()
    }

    #[test]
    fn test_secure_email() {
        let result = guard().secure_email(" Foo@EXAMPLE.com ");
        assert!(result.valid);
        assert_eq!(result.normalized.as_deref(), Some("foo@example.com"));
        assert!(result.error.is_none());

        let result = guard().secure_email("");
        assert_eq!(result.error, Some(ValidationError::Required));

        let result = guard().secure_email("not an email");
        assert!(!result.valid);
        assert!(result.normalized.is_none());
    }

    #[test]
    fn test_secure_email_rejects_raw_payload() {
        // The sanitizer would strip the spaces; the raw screen still rejects it
        let result = guard().secure_email("x@example.com <script>alert(1)</script>");
        assert_eq!(result.error, Some(ValidationError::DangerousContent));
    }

    #[test]
    fn test_secure_name() {
        let result = guard().secure_name("John123 O'Brien-Smith!!", 100);
        assert_eq!(result.sanitized.as_deref(), Some("John O'Brien-Smith"));

        let result = guard().secure_name("J4", 100);
        assert!(!result.valid);
        assert!(matches!(result.error, Some(ValidationError::LengthViolation(_))));

        let result = guard().secure_name("Robert'; DROP TABLE students;--", 100);
        assert_eq!(result.error, Some(ValidationError::DangerousContent));

        let result = guard().secure_name("Maximilian", 3);
        assert_eq!(result.sanitized.as_deref(), Some("Max"));
    }

    #[test]
    fn test_secure_name_counts_letters_only() {
        for raw in ["--", "' '", "- -", "123 -- 456", "J -"] {
            let result = guard().secure_name(raw, 100);
            assert!(!result.valid, "{:?}", raw);
            assert_eq!(
                result.error_message().as_deref(),
                Some("Must be at least 2 characters")
            );
        }

        let result = guard().secure_name("Jo", 100);
        assert_eq!(result.sanitized.as_deref(), Some("Jo"));

        let result = guard().secure_name("Ó'M", 100);
        assert_eq!(result.sanitized.as_deref(), Some("Ó'M"));
    }

    #[test]
    fn test_secure_text() {
        let result = guard().secure_text("  Makerere <i>University</i> ", 200, true);
        assert_eq!(result.sanitized.as_deref(), Some("Makerere University"));

        let result = guard().secure_text("", 200, false);
        assert!(result.valid);
        assert_eq!(result.sanitized.as_deref(), Some(""));

        let result = guard().secure_text("   ", 200, true);
        assert_eq!(result.error_message().as_deref(), Some("This field is required"));

        let result = guard().secure_text("<img src=x onerror=alert(1)>", 200, false);
        assert_eq!(result.error, Some(ValidationError::DangerousContent));
    }

    #[test]
    fn test_secure_phone() {
        let result = guard().secure_phone("+256 (700) 123-456");
        assert!(result.valid);
        assert_eq!(result.sanitized.as_deref(), Some("+256 (700) 123-456"));

        let result = guard().secure_phone(None::<&str>);
        assert!(result.valid);
        assert!(result.sanitized.is_none());

        let result = guard().secure_phone("   ");
        assert!(result.valid);
        assert!(result.sanitized.is_none());

        let result = guard().secure_phone("12345");
        assert!(!result.valid);
        assert_eq!(
            result.error_message().as_deref(),
            Some("Phone number must contain between 7 and 15 digits")
        );

        let result = guard().secure_phone("1234567890123456");
        assert!(!result.valid);
    }

    #[test]
    fn test_secure_number() {
        let min_zero = NumberOptions {
            min: Some(0.0),
            ..NumberOptions::default()
        };

        let result = guard().secure_number("12abc34", min_zero);
        assert!(!result.valid);

        let result = guard().secure_number(" 42 ", min_zero);
        assert_eq!(result.sanitized, Some(42.0));

        let result = guard().secure_number(-3_i64, min_zero);
        assert!(matches!(result.error, Some(ValidationError::OutOfRange(_))));

        let result = guard().secure_number("", min_zero);
        assert!(result.valid);
        assert!(result.sanitized.is_none());

        let required = NumberOptions {
            required: true,
            ..min_zero
        };
        let result = guard().secure_number("", required);
        assert_eq!(result.error, Some(ValidationError::Required));
    }

    #[test]
    fn test_secure_url() {
        let result = guard().secure_url("https://github.com/someone", true);
        assert_eq!(result.sanitized.as_deref(), Some("https://github.com/someone"));

        let result = guard().secure_url("ftp://files.example.com/x", true);
        assert!(!result.valid);

        let result = guard().secure_url("javascript:alert(1)", true);
        assert_eq!(result.error, Some(ValidationError::DangerousContent));

        let result = guard().secure_url("", false);
        assert!(result.valid);
        assert!(result.sanitized.is_none());

        let result = guard().secure_url("example.com", true);
        assert_eq!(result.error_message().as_deref(), Some("Invalid URL"));
    }
}
