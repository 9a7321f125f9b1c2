// File: src/config.rs
// Purpose: Validator configuration (messages and text-key groups) from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::text_key::{KeyCharset, DEFAULT_ALLOWED_GROUP, DEFAULT_NOT_ALLOWED_GROUP};

/// Validator configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub messages: Messages,

    #[serde(default)]
    pub text_key: TextKeyConfig,
}

/// Messages returned inside validation errors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Messages {
    #[serde(default = "default_cpf")]
    pub cpf: String,

    #[serde(default = "default_cnpj")]
    pub cnpj: String,

    #[serde(default = "default_phone")]
    pub phone: String,

    #[serde(default = "default_date")]
    pub date: String,

    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_text_key")]
    pub text_key: String,
}

/// Character groups for the text-key validator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextKeyConfig {
    /// Checked first; a match marks the value invalid
    #[serde(default = "default_allowed_group")]
    pub allowed: String,

    /// Checked when `allowed` finds nothing; a match marks the value invalid
    #[serde(default = "default_not_allowed_group")]
    pub not_allowed: String,
}

// Default values
fn default_cpf() -> String {
    "Número de CPF inválido.".to_string()
}

fn default_cnpj() -> String {
    "Número de CNPJ inválido.".to_string()
}

fn default_phone() -> String {
    "Número inválido.".to_string()
}

fn default_date() -> String {
    "Data inválida. O ano precisa ter 4 dígitos".to_string()
}

fn default_url() -> String {
    "URL Inválida.".to_string()
}

fn default_text_key() -> String {
    "O campo não pode conter acentos, espaços ou caracteres especiais.".to_string()
}

fn default_allowed_group() -> String {
    DEFAULT_ALLOWED_GROUP.to_string()
}

fn default_not_allowed_group() -> String {
    DEFAULT_NOT_ALLOWED_GROUP.to_string()
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            cpf: default_cpf(),
            cnpj: default_cnpj(),
            phone: default_phone(),
            date: default_date(),
            url: default_url(),
            text_key: default_text_key(),
        }
    }
}

impl Default for TextKeyConfig {
    fn default() -> Self {
        Self {
            allowed: default_allowed_group(),
            not_allowed: default_not_allowed_group(),
        }
    }
}

impl TextKeyConfig {
    /// Compile both groups into a [`KeyCharset`]
    pub fn compile(&self) -> Result<KeyCharset, ConfigError> {
        KeyCharset::new(&self.allowed, &self.not_allowed)
    }
}

impl ValidatorConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::info!(path = %path.display(), "loaded validator config");
        Ok(config)
    }

    /// Load configuration from a file, or fall back to defaults if it doesn't exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
