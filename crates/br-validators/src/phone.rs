//! Phone number validator

use crate::checker::DocumentChecker;
use crate::error::{ValidationError, ValidationResult};

/// Validates a phone number with the default checker and message
pub fn validate_phone(value: &str) -> ValidationResult {
    crate::registry::defaults().validate_phone(value)
}

/// The raw value goes to the checker as is, without digit normalization
pub(crate) fn check_phone<C: DocumentChecker + ?Sized>(
    checker: &C,
    value: &str,
    message: &str,
) -> ValidationResult {
    if checker.is_valid_phone(value) {
        return Ok(());
    }

    tracing::debug!(validator = "phone", len = value.len(), "phone format rejected");
    Err(ValidationError::invalid(message))
}
