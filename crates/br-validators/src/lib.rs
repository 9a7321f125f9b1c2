//! Brazilian form validators
//!
//! Pure, stateless validators for single form-field values: CPF and CNPJ
//! document numbers, phone numbers, `DD/MM/YYYY` dates, URLs and key-like
//! text restricted to a safe character set.
//!
//! Every validator takes the raw field content and returns a
//! [`ValidationResult`]: `Ok(())` when the value is valid, or a
//! [`ValidationError`] that serializes to the object a form framework expects
//! (`{"isInvalid": {"expected": true, "message": "..."}}`).
//!
//! ```rust
//! use br_validators::{validate_cpf, validate_date};
//!
//! assert!(validate_cpf("529.982.247-25").is_ok());
//! assert!(validate_date("15/06/99").is_err());
//! ```

pub mod checker;
pub mod config;
pub mod control;
pub mod date;
pub mod digits;
pub mod document;
pub mod error;
pub mod phone;
pub mod registry;
pub mod text_key;
pub mod url;

// Re-export the public surface
pub use checker::{BrazilianDocuments, DocumentChecker};
pub use config::{Messages, TextKeyConfig, ValidatorConfig};
pub use control::{to_errors_json, Control};
pub use date::{parse_display_date, validate_date};
pub use digits::remove_non_digits;
pub use document::{validate_cnpj, validate_cpf};
pub use error::{ConfigError, InvalidDetail, ValidationError, ValidationResult};
pub use phone::validate_phone;
pub use registry::{JstValidators, ValidatorName};
pub use text_key::{validate_text_key, KeyCharset};
pub use url::validate_url;
