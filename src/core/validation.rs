//! Input validation for quickstart.
//!
//! Validates variable names from the configuration table and the values
//! captured for them.

use regex::Regex;

use crate::error::{Result, ValidationError};

/// Validate an environment variable name.
///
/// Names must be usable both as a `.env` key and as a repository secret:
/// - Only A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot be empty
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey.into());
    }

    if let Some(first_char) = key.chars().next() {
        if first_char.is_ascii_digit() {
            return Err(ValidationError::InvalidKey {
                key: key.to_string(),
                reason: "cannot start with a digit".to_string(),
            }
            .into());
        }
    }

    for (i, ch) in key.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(ValidationError::InvalidKey {
                key: key.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. \
                     Only letters, digits, and underscore are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate a captured value against its variable's rule.
///
/// Optional variables without a pattern accept anything, including the
/// empty string. A pattern is only checked against non-empty values unless
/// the variable is also required.
///
/// # Errors
///
/// Returns `ValidationError::Required` or `ValidationError::Pattern`.
pub fn validate_value(
    key: &str,
    value: &str,
    required: bool,
    pattern: Option<&Regex>,
) -> Result<()> {
    if value.is_empty() {
        if required {
            return Err(ValidationError::Required(key.to_string()).into());
        }
        return Ok(());
    }

    if let Some(re) = pattern {
        if !re.is_match(value) {
            return Err(ValidationError::Pattern {
                key: key.to_string(),
                pattern: re.as_str().to_string(),
            }
            .into());
        }
    }

    Ok(())
}
