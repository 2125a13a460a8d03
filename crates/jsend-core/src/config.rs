// Rust guideline compliant 2026-10-19

//! Configuration for JSend rendering and writing.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for envelope rendering.
///
/// The defaults reproduce the standard JSend output, so most callers never
/// need to load a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Message used for error outcomes when none is supplied.
    #[serde(default = "default_error_message")]
    pub default_error_message: String,

    /// Value of the `Content-Type` header set on every response.
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

/// Default substitute message for error outcomes.
fn default_error_message() -> String {
    "Undefined error".to_string()
}

/// Default JSON media type.
fn default_content_type() -> String {
    "application/json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_error_message: default_error_message(),
            content_type: default_content_type(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, if it exists
    /// 3. Environment variables with `JSEND_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| Error::InvalidConfig(format!("Cannot read config file: {}", e)))?;
            config = Self::parse(&content)?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or values fail validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = Self::parse(content)?;
        config.validate()?;
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `JSEND_DEFAULT_ERROR_MESSAGE` - Substitute message for error outcomes
    /// - `JSEND_CONTENT_TYPE` - Content type header value
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable is not valid Unicode.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(val) = read_env("JSEND_DEFAULT_ERROR_MESSAGE")? {
            self.default_error_message = val;
        }

        if let Some(val) = read_env("JSEND_CONTENT_TYPE")? {
            self.content_type = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - default_error_message is empty
    /// - content_type is empty or not of the form `type/subtype`
    fn validate(&self) -> Result<()> {
        if self.default_error_message.is_empty() {
            return Err(Error::InvalidConfig(
                "default_error_message must not be empty".to_string(),
            ));
        }

        if self.content_type.is_empty() || !self.content_type.contains('/') {
            return Err(Error::InvalidConfig(format!(
                "content_type must be a media type, got {:?}",
                self.content_type
            )));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)
            .map_err(|e| Error::InvalidConfig(format!("Cannot write config file: {}", e)))?;
        Ok(())
    }
}

fn read_env(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(val) => Ok(Some(val)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(Error::InvalidConfig(format!(
            "{} must be valid UTF-8",
            name
        ))),
    }
}
