//! Key-like text validation
//!
//! A value is checked against two character groups in order. A match in the
//! `allowed` group marks it invalid; otherwise a match in the `not_allowed`
//! group marks it invalid; otherwise it passes.
//!
//! The default `allowed` group is written as a negated class, so what it
//! matches are characters *outside* the plain-key alphabet. The
//! `not_allowed` group covers accented Latin-1 letters and space.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ConfigError, ValidationResult};

/// Characters outside `A-Z a-z 0-9 _ . -` not already covered by the second group
pub const DEFAULT_ALLOWED_GROUP: &str = r"[^A-Za-z0-9_.\-\x{00C0}-\x{00FF} ]";

/// Accented Latin-1 letters and space
pub const DEFAULT_NOT_ALLOWED_GROUP: &str = r"[\x{00C0}-\x{00FF} ]";

static DEFAULT_CHARSET: Lazy<KeyCharset> = Lazy::new(|| KeyCharset {
    allowed: Regex::new(DEFAULT_ALLOWED_GROUP).unwrap(),
    not_allowed: Regex::new(DEFAULT_NOT_ALLOWED_GROUP).unwrap(),
});

/// The two compiled character groups used by [`validate_text_key`]
#[derive(Debug, Clone)]
pub struct KeyCharset {
    allowed: Regex,
    not_allowed: Regex,
}

/// Which group rejected a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRejection {
    Allowed,
    NotAllowed,
}

impl KeyCharset {
    /// Compile a charset from two regex patterns
    pub fn new(allowed: &str, not_allowed: &str) -> Result<Self, ConfigError> {
        let allowed = Regex::new(allowed).map_err(|source| ConfigError::InvalidPattern {
            name: "allowed",
            source,
        })?;
        let not_allowed =
            Regex::new(not_allowed).map_err(|source| ConfigError::InvalidPattern {
                name: "not_allowed",
                source,
            })?;

        Ok(Self {
            allowed,
            not_allowed,
        })
    }

    pub fn allowed(&self) -> &Regex {
        &self.allowed
    }

    pub fn not_allowed(&self) -> &Regex {
        &self.not_allowed
    }

    /// Runs the two-step check, returning the group that matched, if any
    pub fn rejection(&self, value: &str) -> Option<KeyRejection> {
        if self.allowed.is_match(value) {
            return Some(KeyRejection::Allowed);
        }
        if self.not_allowed.is_match(value) {
            return Some(KeyRejection::NotAllowed);
        }
        None
    }
}

impl Default for KeyCharset {
    fn default() -> Self {
        DEFAULT_CHARSET.clone()
    }
}

/// Validates key-like text with the default groups and message
pub fn validate_text_key(value: &str) -> ValidationResult {
    crate::registry::defaults().validate_text_key(value)
}
