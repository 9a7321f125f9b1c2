//! CPF and CNPJ validators

use crate::checker::DocumentChecker;
use crate::digits::remove_non_digits;
use crate::error::{ValidationError, ValidationResult};

/// Validates a CPF, formatted or not, with the default checker and message
///
/// ```rust
/// use br_validators::validate_cpf;
///
/// assert!(validate_cpf("529.982.247-25").is_ok());
/// assert!(validate_cpf("529.982.247-26").is_err());
/// ```
pub fn validate_cpf(value: &str) -> ValidationResult {
    crate::registry::defaults().validate_cpf(value)
}

/// Validates a CNPJ, formatted or not, with the default checker and message
pub fn validate_cnpj(value: &str) -> ValidationResult {
    crate::registry::defaults().validate_cnpj(value)
}

pub(crate) fn check_cpf<C: DocumentChecker + ?Sized>(
    checker: &C,
    value: &str,
    message: &str,
) -> ValidationResult {
    let digits = remove_non_digits(value);
    if checker.is_valid_cpf(&digits) {
        return Ok(());
    }

    tracing::debug!(validator = "cpf", digits = digits.len(), "check digits rejected");
    Err(ValidationError::invalid(message))
}

pub(crate) fn check_cnpj<C: DocumentChecker + ?Sized>(
    checker: &C,
    value: &str,
    message: &str,
) -> ValidationResult {
    let digits = remove_non_digits(value);
    if checker.is_valid_cnpj(&digits) {
        return Ok(());
    }

    tracing::debug!(validator = "cnpj", digits = digits.len(), "check digits rejected");
    Err(ValidationError::invalid(message))
}
