//! Validity predicates for Brazilian document numbers and phones
//!
//! Validators depend on the [`DocumentChecker`] capability rather than on the
//! algorithms directly, so a host can swap in another implementation (or a
//! test fake) without touching the validation logic.

use phonenumber::country::Id;

/// Boolean validity predicates the document and phone validators delegate to.
pub trait DocumentChecker: Send + Sync {
    /// CPF check-digit validity. Expects digits only.
    fn is_valid_cpf(&self, cpf: &str) -> bool;

    /// CNPJ check-digit validity. Expects digits only.
    fn is_valid_cnpj(&self, cnpj: &str) -> bool;

    /// Phone-number format validity over the raw field content.
    fn is_valid_phone(&self, phone: &str) -> bool;
}

/// Official CPF/CNPJ check-digit algorithms; phones are checked against the
/// Brazilian numbering plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrazilianDocuments;

const CPF_LENGTH: usize = 11;
const CNPJ_LENGTH: usize = 14;

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

impl DocumentChecker for BrazilianDocuments {
    fn is_valid_cpf(&self, cpf: &str) -> bool {
        let Some(digits) = parse_digits(cpf, CPF_LENGTH) else {
            return false;
        };
        if is_repeated(&digits) {
            return false;
        }

        let first = cpf_check_digit(&digits[..9]);
        let second = cpf_check_digit(&digits[..10]);
        digits[9] == first && digits[10] == second
    }

    fn is_valid_cnpj(&self, cnpj: &str) -> bool {
        let Some(digits) = parse_digits(cnpj, CNPJ_LENGTH) else {
            return false;
        };
        if is_repeated(&digits) {
            return false;
        }

        let first = cnpj_check_digit(&digits[..12], &CNPJ_FIRST_WEIGHTS);
        let second = cnpj_check_digit(&digits[..13], &CNPJ_SECOND_WEIGHTS);
        digits[12] == first && digits[13] == second
    }

    fn is_valid_phone(&self, phone: &str) -> bool {
        match phonenumber::parse(Some(Id::BR), phone) {
            Ok(number) => number.is_valid(),
            Err(_) => false,
        }
    }
}

/// Digits of `value` when it is exactly `len` ASCII digits.
fn parse_digits(value: &str, len: usize) -> Option<Vec<u32>> {
    if value.len() != len {
        return None;
    }
    value.chars().map(|c| c.to_digit(10)).collect()
}

fn is_repeated(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

fn cpf_check_digit(digits: &[u32]) -> u32 {
    let weight_start = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (weight_start - i as u32))
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        digit => digit,
    }
}

fn cnpj_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cpf() {
        assert!(BrazilianDocuments.is_valid_cpf("52998224725"));
        assert!(BrazilianDocuments.is_valid_cpf("11144477735"));
    }

    #[test]
    fn test_invalid_cpf() {
        assert!(!BrazilianDocuments.is_valid_cpf("52998224726"));
        assert!(!BrazilianDocuments.is_valid_cpf("11111111111"));
        assert!(!BrazilianDocuments.is_valid_cpf("5299822472"));
        assert!(!BrazilianDocuments.is_valid_cpf("529982247250"));
        assert!(!BrazilianDocuments.is_valid_cpf("529.982.247-25"));
        assert!(!BrazilianDocuments.is_valid_cpf(""));
    }

    #[test]
    fn test_valid_cnpj() {
        assert!(BrazilianDocuments.is_valid_cnpj("11222333000181"));
    }

    #[test]
    fn test_cnpj_check_digit_low_remainder() {
        // remainder 0 or 1 yields 0
        assert_eq!(cnpj_check_digit(&[0; 12], &CNPJ_FIRST_WEIGHTS), 0);
    }

    #[test]
    fn test_invalid_cnpj() {
        assert!(!BrazilianDocuments.is_valid_cnpj("11222333000182"));
        assert!(!BrazilianDocuments.is_valid_cnpj("00000000000000"));
        assert!(!BrazilianDocuments.is_valid_cnpj("1122233300018"));
        assert!(!BrazilianDocuments.is_valid_cnpj(""));
    }

    #[test]
    fn test_valid_phones() {
        // mobile
        assert!(BrazilianDocuments.is_valid_phone("(11) 98765-4321"));
        assert!(BrazilianDocuments.is_valid_phone("11987654321"));
        // landline
        assert!(BrazilianDocuments.is_valid_phone("(11) 3456-7890"));
        // international form
        assert!(BrazilianDocuments.is_valid_phone("+55 21 98765-4321"));
    }

    #[test]
    fn test_invalid_phones() {
        assert!(!BrazilianDocuments.is_valid_phone("(00) 98765-4321"));
        assert!(!BrazilianDocuments.is_valid_phone("123"));
        assert!(!BrazilianDocuments.is_valid_phone("not a phone"));
        assert!(!BrazilianDocuments.is_valid_phone(""));
    }

    #[test]
    fn test_cpf_check_digits() {
        assert_eq!(cpf_check_digit(&[5, 2, 9, 9, 8, 2, 2, 4, 7]), 2);
        assert_eq!(cpf_check_digit(&[5, 2, 9, 9, 8, 2, 2, 4, 7, 2]), 5);
    }
}
