//! Digit normalization

/// Removes every character that is not an ASCII decimal digit, keeping order.
pub fn remove_non_digits(data: &str) -> String {
    data.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Number of ASCII decimal digits in `data`.
pub(crate) fn count_digits(data: &str) -> usize {
    data.chars().filter(|c| c.is_ascii_digit()).count()
}
