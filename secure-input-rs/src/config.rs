//! Sanitizer configuration
//!
//! Defaults for per-type length bounds and the request-size guard. The config is
//! handed to [`crate::SecureInput::new`] once; nothing reads the environment per call.

use serde::Deserialize;
use std::env;
use std::str::FromStr;

use crate::input::InputType;

/// Default maximum length for general text fields
pub const DEFAULT_TEXT_MAX_LENGTH: usize = 1_000;

/// Default maximum length for person names
pub const DEFAULT_NAME_MAX_LENGTH: usize = 100;

/// Maximum email address length (RFC 5321)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Default maximum length for phone numbers
pub const DEFAULT_PHONE_MAX_LENGTH: usize = 20;

/// Default maximum length for URLs
pub const DEFAULT_URL_MAX_LENGTH: usize = 2_048;

/// Default maximum length for free-text content (motivations, descriptions)
pub const DEFAULT_CONTENT_MAX_LENGTH: usize = 50_000;

/// Longest numeric string that will be parsed
pub const DEFAULT_NUMBER_MAX_LENGTH: usize = 64;

/// Default request body limit (100 KiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024;

/// Prefix for environment overrides
const ENV_PREFIX: &str = "SECURE_INPUT";

/// Configuration for the sanitization layer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Maximum length for `text` fields
    pub text_max_length: usize,
    /// Maximum length for `name` fields
    pub name_max_length: usize,
    /// Minimum effective length of a name after stripping
    pub name_min_length: usize,
    /// Maximum length for `email` fields, never above 254
    pub email_max_length: usize,
    /// Maximum length for `phone` fields
    pub phone_max_length: usize,
    /// Fewest digits a phone number may contain
    pub phone_min_digits: usize,
    /// Most digits a phone number may contain
    pub phone_max_digits: usize,
    /// Maximum length for `url` fields
    pub url_max_length: usize,
    /// Maximum length for `content` fields
    pub content_max_length: usize,
    /// Maximum length of a numeric string
    pub number_max_length: usize,
    /// Maximum serialized request body size in bytes
    pub max_body_bytes: usize,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            text_max_length: DEFAULT_TEXT_MAX_LENGTH,
            name_max_length: DEFAULT_NAME_MAX_LENGTH,
            name_min_length: 2,
            email_max_length: MAX_EMAIL_LENGTH,
            phone_max_length: DEFAULT_PHONE_MAX_LENGTH,
            phone_min_digits: 7,
            phone_max_digits: 15,
            url_max_length: DEFAULT_URL_MAX_LENGTH,
            content_max_length: DEFAULT_CONTENT_MAX_LENGTH,
            number_max_length: DEFAULT_NUMBER_MAX_LENGTH,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl SanitizerConfig {
    /// Build a configuration from `SECURE_INPUT_*` environment variables.
    ///
    /// Loads a `.env` file first if one is present. Variables that are missing or
    /// unparsable fall back to the defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            text_max_length: env_or("TEXT_MAX_LENGTH", defaults.text_max_length),
            name_max_length: env_or("NAME_MAX_LENGTH", defaults.name_max_length),
            name_min_length: env_or("NAME_MIN_LENGTH", defaults.name_min_length),
            email_max_length: env_or("EMAIL_MAX_LENGTH", defaults.email_max_length),
            phone_max_length: env_or("PHONE_MAX_LENGTH", defaults.phone_max_length),
            phone_min_digits: env_or("PHONE_MIN_DIGITS", defaults.phone_min_digits),
            phone_max_digits: env_or("PHONE_MAX_DIGITS", defaults.phone_max_digits),
            url_max_length: env_or("URL_MAX_LENGTH", defaults.url_max_length),
            content_max_length: env_or("CONTENT_MAX_LENGTH", defaults.content_max_length),
            number_max_length: env_or("NUMBER_MAX_LENGTH", defaults.number_max_length),
            max_body_bytes: env_or("MAX_BODY_BYTES", defaults.max_body_bytes),
        };
        config.clamped()
    }

    /// Default maximum length for an input type
    pub fn max_length_for(&self, input_type: InputType) -> usize {
        match input_type {
            InputType::Text => self.text_max_length,
            InputType::Name => self.name_max_length,
            InputType::Email => self.email_max_length.min(MAX_EMAIL_LENGTH),
            InputType::Phone => self.phone_max_length,
            InputType::Url => self.url_max_length,
            InputType::Content => self.content_max_length,
            InputType::Number => self.number_max_length,
        }
    }

    /// Keep values that other settings depend on inside sane bounds
    fn clamped(mut self) -> Self {
        if self.email_max_length > MAX_EMAIL_LENGTH {
            log::warn!(
                "{}_EMAIL_MAX_LENGTH above {} is not allowed, using {}",
                ENV_PREFIX,
                MAX_EMAIL_LENGTH,
                MAX_EMAIL_LENGTH
            );
            self.email_max_length = MAX_EMAIL_LENGTH;
        }
        if self.phone_min_digits > self.phone_max_digits {
            log::warn!(
                "Phone digit bounds are inverted ({} > {}), using defaults",
                self.phone_min_digits,
                self.phone_max_digits
            );
            let defaults = Self::default();
            self.phone_min_digits = defaults.phone_min_digits;
            self.phone_max_digits = defaults.phone_max_digits;
        }
        self
    }
}

/// Read `SECURE_INPUT_<name>` with a logged fallback
fn env_or<T>(name: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    let var_name = format!("{}_{}", ENV_PREFIX, name);
    match env::var(&var_name) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            log::warn!("Invalid value in {}, using default {}", var_name, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SanitizerConfig::default();
        assert_eq!(config.email_max_length, 254);
        assert_eq!(config.phone_max_length, 20);
        assert_eq!(config.url_max_length, 2048);
        assert_eq!(config.content_max_length, 50_000);
        assert_eq!(config.max_body_bytes, 100 * 1024);
        assert_eq!(config.max_length_for(InputType::Name), 100);
    }

    #[test]
    fn test_env_override() {
        env::set_var("SECURE_INPUT_NAME_MAX_LENGTH", "60");
        env::set_var("SECURE_INPUT_CONTENT_MAX_LENGTH", "lots");
        env::set_var("SECURE_INPUT_EMAIL_MAX_LENGTH", "1000");

        let config = SanitizerConfig::from_env();
        assert_eq!(config.name_max_length, 60);
        assert_eq!(config.content_max_length, DEFAULT_CONTENT_MAX_LENGTH);
        assert_eq!(config.email_max_length, MAX_EMAIL_LENGTH);

        env::remove_var("SECURE_INPUT_NAME_MAX_LENGTH");
        env::remove_var("SECURE_INPUT_CONTENT_MAX_LENGTH");
        env::remove_var("SECURE_INPUT_EMAIL_MAX_LENGTH");
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SanitizerConfig =
            serde_json::from_str(r#"{"text_max_length": 500}"#).unwrap();
        assert_eq!(config.text_max_length, 500);
        assert_eq!(config.name_max_length, DEFAULT_NAME_MAX_LENGTH);
    }
}
