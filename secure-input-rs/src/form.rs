//! Multi-field validation
//!
//! Request handlers validate a whole form at once. Fields are independent: the form
//! is valid only if every field is, and every failing field is reported.

use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::errors::{FieldError, ValidationError};
use crate::guard::SecureInput;
use crate::input::{RawInput, SanitizedValue, ValidationOptions};

/// A named field and the options it is validated with
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub options: ValidationOptions,
}

impl FieldSpec {
    pub fn new<S: Into<String>>(name: S, options: ValidationOptions) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

/// Outcome of validating a set of fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormReport {
    /// True only if every field passed
    pub valid: bool,
    /// Sanitized values of the fields that passed
    pub values: BTreeMap<String, SanitizedValue>,
    /// One entry per failing field, in input order
    pub errors: Vec<FieldError>,
}

impl FormReport {
    fn new() -> Self {
        Self {
            valid: true,
            values: BTreeMap::new(),
            errors: Vec::new(),
        }
    }

    /// Sanitized text value of a field that passed
    pub fn text(&self, field: &str) -> Option<&str> {
        self.values.get(field).and_then(SanitizedValue::as_str)
    }

    /// Sanitized numeric value of a field that passed
    pub fn number(&self, field: &str) -> Option<f64> {
        self.values.get(field).and_then(SanitizedValue::as_f64)
    }

    /// JSON body for a 400 response listing each field's error
    pub fn error_body(&self) -> Value {
        json!({
            "error": "Validation failed",
            "code": 400,
            "details": self.errors,
        })
    }
}

impl SecureInput {
    /// Validate a sequence of `(field, value, options)` triples
    pub fn validate_fields<'a, I>(&self, fields: I) -> FormReport
    where
        I: IntoIterator<Item = (&'a str, RawInput, ValidationOptions)>,
    {
        let mut report = FormReport::new();

        for (field, raw, options) in fields {
            match self.validate_and_sanitize(raw, &options).into_result() {
                Ok(value) => {
                    report.values.insert(field.to_string(), value);
                }
                Err(err) => {
                    report.valid = false;
                    report.errors.push(FieldError::new(field, &err));
                }
            }
        }

        report
    }

    /// Validate the named fields of a parsed JSON object.
    ///
    /// Keys absent from the body are treated as missing; keys not listed in `specs`
    /// are ignored and never copied into the report.
    pub fn validate_json_fields(&self, body: &Value, specs: &[FieldSpec]) -> FormReport {
        let object = match body {
            Value::Object(map) => map,
            _ => {
                let mut report = FormReport::new();
                report.valid = false;
                report.errors.push(FieldError::new(
                    "body",
                    &ValidationError::invalid_format("Request body must be a JSON object"),
                ));
                return report;
            }
        };

        self.validate_fields(specs.iter().map(|spec| {
            let raw = object.get(&spec.name).map_or(RawInput::Missing, RawInput::from);
            (spec.name.as_str(), raw, spec.options.clone())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputType;

    fn application_specs() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("name", ValidationOptions::new(InputType::Name).required()),
            FieldSpec::new("email", ValidationOptions::new(InputType::Email).required()),
            FieldSpec::new("age", ValidationOptions::new(InputType::Number).min(10.0).max(100.0)),
            FieldSpec::new("motivation", ValidationOptions::new(InputType::Content)),
        ]
    }

    #[test]
    fn test_valid_application() {
        let body = json!({
            "name": "  Amina   Nakato ",
            "email": "Amina@Example.org",
            "age": 17,
            "motivation": "I want to build apps for my community.",
            "admin": true
        });

        let report = SecureInput::default().validate_json_fields(&body, &application_specs());
        assert!(report.valid);
        assert!(report.errors.is_empty());
        assert_eq!(report.text("name"), Some("Amina Nakato"));
        assert_eq!(report.text("email"), Some("amina@example.org"));
        assert_eq!(report.number("age"), Some(17.0));
        assert!(!report.values.contains_key("admin"));
    }

    #[test]
    fn test_every_failure_reported() {
        let body = json!({
            "email": "not-an-email",
            "age": "twelve",
            "motivation": "<script>alert(1)</script>"
        });

        let report = SecureInput::default().validate_json_fields(&body, &application_specs());
        assert!(!report.valid);

        let fields: Vec<&str> = report.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "age"]);
        assert_eq!(report.errors[0].message, "This field is required");
        // Script block is stripped, leaving an empty optional field
        assert_eq!(report.text("motivation"), Some(""));
    }

    #[test]
    fn test_error_body() {
        let report = SecureInput::default().validate_fields(vec![(
            "bio",
            RawInput::from("<iframe src=x>"),
            ValidationOptions::new(InputType::Content),
        )]);

        let body = report.error_body();
        assert_eq!(body["code"], 400);
        assert_eq!(body["details"][0]["field"], "bio");
        assert_eq!(
            body["details"][0]["message"],
            "Input contains potentially dangerous content"
        );
        assert_eq!(body["details"][0]["kind"], "dangerous_content");
    }

    #[test]
    fn test_non_object_body() {
        let report = SecureInput::default().validate_json_fields(&json!([1, 2]), &application_specs());
        assert!(!report.valid);
        assert_eq!(report.errors[0].field, "body");
    }
}
