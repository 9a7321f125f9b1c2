//! Validation result and configuration error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of a single validator call. `Ok(())` means the value is valid.
pub type ValidationResult = Result<(), ValidationError>;

/// Detail carried under the `isInvalid` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidDetail {
    pub expected: bool,
    pub message: String,
}

/// Error object returned to the form framework when a value fails.
///
/// Serializes untagged, so the JSON shape is either
/// `{"isInvalid": {"expected": true, "message": "..."}}` or
/// `{"message": "..."}` (date validator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidationError {
    Invalid {
        #[serde(rename = "isInvalid")]
        is_invalid: InvalidDetail,
    },
    Message {
        message: String,
    },
}

impl ValidationError {
    /// Builds the `isInvalid` form with `expected: true`
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            is_invalid: InvalidDetail {
                expected: true,
                message: message.into(),
            },
        }
    }

    /// Builds the bare `message` form
    pub fn message_only(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }

    /// Human-readable message, whichever form the error has
    pub fn message(&self) -> &str {
        match self {
            Self::Invalid { is_invalid } => &is_invalid.message,
            Self::Message { message } => message,
        }
    }

    /// Error name as the form framework keys it, if any
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::Invalid { .. } => Some("isInvalid"),
            Self::Message { .. } => None,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while building validators from configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid pattern for `{name}`: {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("failed to parse validator config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown validator `{0}`")]
    UnknownValidator(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invalid_shape() {
        let error = ValidationError::invalid("Número de CPF inválido.");
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({ "isInvalid": { "expected": true, "message": "Número de CPF inválido." } })
        );
        assert_eq!(error.key(), Some("isInvalid"));
    }

    #[test]
    fn test_message_shape() {
        let error = ValidationError::message_only("Data inválida.");
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({ "message": "Data inválida." })
        );
        assert_eq!(error.key(), None);
        assert_eq!(error.to_string(), "Data inválida.");
    }

    #[test]
    fn test_deserialize_both_shapes() {
        let invalid: ValidationError = serde_json::from_value(
            json!({ "isInvalid": { "expected": true, "message": "URL Inválida." } }),
        )
        .unwrap();
        assert_eq!(invalid, ValidationError::invalid("URL Inválida."));

        let message: ValidationError =
            serde_json::from_value(json!({ "message": "x" })).unwrap();
        assert_eq!(message, ValidationError::message_only("x"));
    }
}
