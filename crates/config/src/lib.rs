//! Configuration management for the college admissions agent
//!
//! Supports loading configuration from:
//! - YAML/TOML files
//! - Environment variables (COLLEGE_AGENT_ prefix)
//! - Built-in defaults
//!
//! Response templates (labels, glyph prefixes, fallback phrases) live
//! here so presentation detail stays configurable/localizable instead of
//! hard-coded in the composer.

pub mod settings;
pub mod templates;

pub use settings::{load_settings, DatasetConfig, ServerConfig, Settings};
pub use templates::{FallbackText, ResponseLabels, ResponseTemplates};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment error: {0}")]
    Environment(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
