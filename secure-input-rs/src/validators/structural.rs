//! Structural validators
//!
//! Required, length and range checks. They always run on the sanitized value, so
//! lengths are those of what will actually be stored.

use crate::errors::{ValidationError, ValidationResult};
use crate::input::{SanitizedValue, ValidationOptions};

/// Validate that a sanitized string is non-empty once trimmed
pub fn check_required(s: &str) -> ValidationResult<()> {
    if s.trim().is_empty() {
        Err(ValidationError::Required)
    } else {
        Ok(())
    }
}

/// Validate character length against optional bounds
pub fn check_length(s: &str, min: Option<usize>, max: Option<usize>) -> ValidationResult<()> {
    let len = s.chars().count();

    if let Some(min) = min {
        if len < min {
            return Err(ValidationError::length(format!(
                "Must be at least {} characters",
                min
            )));
        }
    }

    if let Some(max) = max {
        if len > max {
            return Err(ValidationError::length(format!(
                "Must be at most {} characters",
                max
            )));
        }
    }

    Ok(())
}

/// Validate that a number is within optional inclusive bounds
pub fn check_range(value: f64, min: Option<f64>, max: Option<f64>) -> ValidationResult<()> {
    if let Some(min) = min {
        if value < min {
            return Err(ValidationError::OutOfRange(format!("Must be at least {}", min)));
        }
    }

    if let Some(max) = max {
        if value > max {
            return Err(ValidationError::OutOfRange(format!("Must be at most {}", max)));
        }
    }

    Ok(())
}

/// Run the structural checks that apply to a sanitized value
pub fn check(value: &SanitizedValue, options: &ValidationOptions) -> ValidationResult<()> {
    match value {
        SanitizedValue::Text(s) => {
            if options.required {
                check_required(s)?;
            }
            // An optional field that sanitized down to nothing is simply empty
            if s.is_empty() {
                return Ok(());
            }
            check_length(s, options.min_length, options.max_length)
        }
        SanitizedValue::Number(n) => check_range(*n, options.min, options.max),
    }
}
