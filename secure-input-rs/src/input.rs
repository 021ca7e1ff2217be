//! Input and result types shared by the facade and the wrappers

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::errors::{ValidationError, ValidationResult};

/// Semantic type of an input field. Selects the sanitizer and default bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Email,
    Name,
    Phone,
    Url,
    Content,
    Number,
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Name => "name",
            InputType::Phone => "phone",
            InputType::Url => "url",
            InputType::Content => "content",
            InputType::Number => "number",
        };
        f.write_str(name)
    }
}

/// Untrusted value as received from a request
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// Absent or `null`
    Missing,
    /// A string value
    Text(String),
    /// A numeric value
    Number(f64),
    /// Any other shape (boolean, array, object); carries the kind name
    Unsupported(&'static str),
}

impl RawInput {
    /// True for missing input and strings that are empty once trimmed
    pub fn is_blank(&self) -> bool {
        match self {
            RawInput::Missing => true,
            RawInput::Text(s) => s.trim().is_empty(),
            RawInput::Number(_) | RawInput::Unsupported(_) => false,
        }
    }

    /// The string payload, if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawInput::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        RawInput::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        RawInput::Text(value)
    }
}

impl From<&String> for RawInput {
    fn from(value: &String) -> Self {
        RawInput::Text(value.clone())
    }
}

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        RawInput::Number(value)
    }
}

impl From<i64> for RawInput {
    fn from(value: i64) -> Self {
        RawInput::Number(value as f64)
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawInput::Missing, Into::into)
    }
}

impl From<&Value> for RawInput {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => RawInput::Missing,
            Value::String(s) => RawInput::Text(s.clone()),
            Value::Number(n) => n
                .as_f64()
                .map_or(RawInput::Unsupported("number"), RawInput::Number),
            Value::Bool(_) => RawInput::Unsupported("boolean"),
            Value::Array(_) => RawInput::Unsupported("array"),
            Value::Object(_) => RawInput::Unsupported("object"),
        }
    }
}

/// Per-call validation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Which sanitizer runs
    #[serde(rename = "type")]
    pub input_type: InputType,
    /// Whether a blank value is rejected
    #[serde(default)]
    pub required: bool,
    /// Maximum length in characters; the per-type default applies when unset
    #[serde(default)]
    pub max_length: Option<usize>,
    /// Minimum length in characters of the sanitized value
    #[serde(default)]
    pub min_length: Option<usize>,
    /// Skip the post-sanitization pattern scan
    #[serde(default)]
    pub allow_html: bool,
    /// Lower numeric bound (number fields only)
    #[serde(default)]
    pub min: Option<f64>,
    /// Upper numeric bound (number fields only)
    #[serde(default)]
    pub max: Option<f64>,
}

impl ValidationOptions {
    /// Optional field of the given type with default bounds
    pub fn new(input_type: InputType) -> Self {
        Self {
            input_type,
            required: false,
            max_length: None,
            min_length: None,
            allow_html: false,
            min: None,
            max: None,
        }
    }

    /// Reject blank values
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set whether blank values are rejected
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Override the per-type maximum length
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Require at least this many characters after sanitizing
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Skip the pattern scan of the sanitized value
    pub fn allow_html(mut self) -> Self {
        self.allow_html = true;
        self
    }

    /// Set the inclusive lower bound for number fields
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the inclusive upper bound for number fields
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Canonical value produced by a sanitizer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SanitizedValue {
    Text(String),
    Number(f64),
}

impl SanitizedValue {
    /// The text value, if this is text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SanitizedValue::Text(s) => Some(s),
            SanitizedValue::Number(_) => None,
        }
    }

    /// The numeric value, if this is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SanitizedValue::Number(n) => Some(*n),
            SanitizedValue::Text(_) => None,
        }
    }

    /// Take the text value, if this is text
    pub fn into_text(self) -> Option<String> {
        match self {
            SanitizedValue::Text(s) => Some(s),
            SanitizedValue::Number(_) => None,
        }
    }
}

impl fmt::Display for SanitizedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanitizedValue::Text(s) => f.write_str(s),
            SanitizedValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Verdict for a single field.
///
/// Either `valid` with a sanitized value, or invalid with an error; the
/// constructors make the mixed states unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizationResult {
    valid: bool,
    sanitized: Option<SanitizedValue>,
    error: Option<ValidationError>,
}

impl SanitizationResult {
    /// A valid result carrying the sanitized value
    pub fn success(value: SanitizedValue) -> Self {
        Self {
            valid: true,
            sanitized: Some(value),
            error: None,
        }
    }

    /// A rejected result carrying the reason
    pub fn failure(error: ValidationError) -> Self {
        Self {
            valid: false,
            sanitized: None,
            error: Some(error),
        }
    }

    /// Whether the value was accepted
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Sanitized value, present only when valid
    pub fn sanitized(&self) -> Option<&SanitizedValue> {
        self.sanitized.as_ref()
    }

    /// Rejection reason, present only when invalid
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// User-facing error message, if the value was rejected
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Convert into a `Result` for use with `?`
    pub fn into_result(self) -> ValidationResult<SanitizedValue> {
        self.into()
    }
}

impl From<ValidationResult<SanitizedValue>> for SanitizationResult {
    fn from(result: ValidationResult<SanitizedValue>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(err) => Self::failure(err),
        }
    }
}

impl From<SanitizationResult> for ValidationResult<SanitizedValue> {
    fn from(result: SanitizationResult) -> Self {
        match (result.sanitized, result.error) {
            (Some(value), None) => Ok(value),
            (_, Some(err)) => Err(err),
            (None, None) => Err(ValidationError::Required),
        }
    }
}
