// File: src/registry.rs
// Purpose: The exported validator bundle and name-based lookup

use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

use crate::checker::{BrazilianDocuments, DocumentChecker};
use crate::config::{Messages, ValidatorConfig};
use crate::control::Control;
use crate::error::{ConfigError, ValidationError, ValidationResult};
use crate::text_key::KeyCharset;
use crate::{date, document, phone, url};

static DEFAULTS: Lazy<JstValidators> = Lazy::new(JstValidators::default);

/// Bundle used by the module-level `validate_*` functions
pub(crate) fn defaults() -> &'static JstValidators {
    &DEFAULTS
}

/// Host-facing validator names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorName {
    Date,
    Cnpj,
    Cpf,
    Phone,
    Url,
    TextKey,
}

impl ValidatorName {
    pub const ALL: [ValidatorName; 6] = [
        Self::Date,
        Self::Cnpj,
        Self::Cpf,
        Self::Phone,
        Self::Url,
        Self::TextKey,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "validateDate",
            Self::Cnpj => "validateCNPJ",
            Self::Cpf => "validateCPF",
            Self::Phone => "validatePhone",
            Self::Url => "validateUrl",
            Self::TextKey => "validateTextKey",
        }
    }
}

impl fmt::Display for ValidatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidatorName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownValidator(s.to_string()))
    }
}

/// All validators bundled under one value.
///
/// Generic over the [`DocumentChecker`] so tests and hosts can substitute the
/// CPF/CNPJ/phone predicates.
#[derive(Debug, Clone)]
pub struct JstValidators<C = BrazilianDocuments> {
    checker: C,
    messages: Messages,
    charset: KeyCharset,
}

impl Default for JstValidators {
    fn default() -> Self {
        Self::new(BrazilianDocuments)
    }
}

impl JstValidators {
    /// Build the bundle from configuration
    pub fn from_config(config: &ValidatorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            checker: BrazilianDocuments,
            messages: config.messages.clone(),
            charset: config.text_key.compile()?,
        })
    }
}

impl<C: DocumentChecker> JstValidators<C> {
    /// Bundle with default messages and character groups
    pub fn new(checker: C) -> Self {
        Self {
            checker,
            messages: Messages::default(),
            charset: KeyCharset::default(),
        }
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_charset(mut self, charset: KeyCharset) -> Self {
        self.charset = charset;
        self
    }

    pub fn checker(&self) -> &C {
        &self.checker
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn validate_cpf(&self, value: &str) -> ValidationResult {
        document::check_cpf(&self.checker, value, &self.messages.cpf)
    }

    pub fn validate_cnpj(&self, value: &str) -> ValidationResult {
        document::check_cnpj(&self.checker, value, &self.messages.cnpj)
    }

    pub fn validate_phone(&self, value: &str) -> ValidationResult {
        phone::check_phone(&self.checker, value, &self.messages.phone)
    }

    pub fn validate_date(&self, value: &str) -> ValidationResult {
        date::check_date(value, &self.messages.date)
    }

    pub fn validate_url(&self, value: &str) -> ValidationResult {
        url::check_url(value, &self.messages.url)
    }

    pub fn validate_text_key(&self, value: &str) -> ValidationResult {
        match self.charset.rejection(value) {
            None => Ok(()),
            Some(group) => {
                tracing::debug!(validator = "text_key", ?group, "disallowed character");
                Err(ValidationError::invalid(self.messages.text_key.as_str()))
            }
        }
    }

    /// Dispatch by validator name
    pub fn validate(&self, name: ValidatorName, value: &str) -> ValidationResult {
        match name {
            ValidatorName::Date => self.validate_date(value),
            ValidatorName::Cnpj => self.validate_cnpj(value),
            ValidatorName::Cpf => self.validate_cpf(value),
            ValidatorName::Phone => self.validate_phone(value),
            ValidatorName::Url => self.validate_url(value),
            ValidatorName::TextKey => self.validate_text_key(value),
        }
    }

    /// Validate a host control; a missing value is treated as empty text
    pub fn validate_control<T: Control + ?Sized>(
        &self,
        name: ValidatorName,
        control: &T,
    ) -> ValidationResult {
        let value = control.value();
        self.validate(name, value.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for name in ValidatorName::ALL {
            assert_eq!(name.as_str().parse::<ValidatorName>().unwrap(), name);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "validateEmail".parse::<ValidatorName>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownValidator(ref n) if n == "validateEmail"));
    }

    #[test]
    fn test_dispatch() {
        let validators = JstValidators::default();
        assert!(validators.validate(ValidatorName::Cpf, "529.982.247-25").is_ok());
        assert!(validators.validate(ValidatorName::Date, "15/06/99").is_err());
        assert!(validators.validate(ValidatorName::TextKey, "chave_ok").is_ok());
        assert!(validators.validate(ValidatorName::TextKey, "chave ruim").is_err());
    }

    #[test]
    fn test_custom_messages() {
        let messages = Messages {
            url: "Invalid URL.".to_string(),
            ..Messages::default()
        };
        let validators = JstValidators::default().with_messages(messages);
        let err = validators.validate_url("nope").unwrap_err();
        assert_eq!(err.message(), "Invalid URL.");
    }

    #[test]
    fn test_from_config() {
        let config = ValidatorConfig::from_toml_str(
            r#"
            [text_key]
            allowed = "[0-9]"
            not_allowed = "[A-Z]"
            "#,
        )
        .unwrap();
        let validators = JstValidators::from_config(&config).unwrap();
        assert!(validators.validate_text_key("abc").is_ok());
        assert!(validators.validate_text_key("abc1").is_err());
        assert!(validators.validate_text_key("Abc").is_err());
    }
}
