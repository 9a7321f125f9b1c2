//! URL validation (syntactic only)

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ValidationError, ValidationResult};

// Optional http(s) scheme, dotted host, optional port, optional path/query/fragment
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:https?://)?(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}(?::\d{1,5})?(?:[/?#][a-z0-9\-._~:/?#\[\]@!$&'()*+,;=%]*)?$",
    )
    .unwrap()
});

/// Validates a URL with the default message
pub fn validate_url(value: &str) -> ValidationResult {
    crate::registry::defaults().validate_url(value)
}

/// Syntactic URL check, no network lookups
pub fn is_valid_url(value: &str) -> bool {
    URL_REGEX.is_match(value)
}

pub(crate) fn check_url(value: &str, message: &str) -> ValidationResult {
    if is_valid_url(value) {
        return Ok(());
    }

    tracing::debug!(validator = "url", len = value.len(), "pattern mismatch");
    Err(ValidationError::invalid(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        assert!(is_valid_url("https://example.com/path?x=1"));
        assert!(is_valid_url("http://test.co.uk"));
        assert!(is_valid_url("example.com"));
        assert!(is_valid_url("www.example.com.br/a/b#secao"));
        assert!(is_valid_url("https://sub.example-site.org:8080/api/v1?q=a%20b&x=1"));
        assert!(is_valid_url("HTTPS://EXAMPLE.COM"));

        assert!(!is_valid_url(""));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("http://nodomain"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("https://example.com/a b"));
        assert!(!is_valid_url("https://-bad.com"));
    }

    #[test]
    fn test_check_url_shape() {
        let err = check_url("not a url", "URL Inválida.").unwrap_err();
        assert_eq!(err, ValidationError::invalid("URL Inválida."));
        assert!(check_url("https://example.com", "URL Inválida.").is_ok());
    }
}
