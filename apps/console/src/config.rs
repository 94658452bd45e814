//! # Configuration
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (priority order)
//! 1. Environment variables (`MERCADO_*`)
//! 2. Config file (`mercado.toml` in the working directory, or the path in
//!    `MERCADO_CONFIG`)
//! 3. Defaults (this file)
//!
//! ## Configuration File Format
//! ```toml
//! # mercado.toml
//! store_name = "Vitor's Market"
//! currency_symbol = "$"
//! currency_decimals = 2
//! owner_username = "@dono"
//! owner_password = "123456"
//! ```
//!
//! The owner credentials are a toy gate for role selection, not a security
//! boundary; they are compared in plaintext.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors from loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`Config`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Application configuration. Read-only after startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Store name shown in the welcome banner.
    pub store_name: String,

    /// Currency symbol for display.
    pub currency_symbol: String,

    /// Number of decimal places for currency display.
    pub currency_decimals: u8,

    /// Username for the owner gate.
    pub owner_username: String,

    /// Password for the owner gate.
    pub owner_password: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_name: "Vitor's Market".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            owner_username: "@dono".to_string(),
            owner_password: "123456".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration: file if present, defaults otherwise, then
    /// environment overrides on top.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("MERCADO_CONFIG").unwrap_or_else(|_| "mercado.toml".to_string());

        let mut config = match std::fs::read_to_string(&path) {
            Ok(raw) => toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path, "no config file found, using defaults");
                Config::default()
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        config.apply_env();
        Ok(config)
    }

    /// Applies `MERCADO_*` environment variable overrides.
    fn apply_env(&mut self) {
        if let Ok(value) = std::env::var("MERCADO_STORE_NAME") {
            self.store_name = value;
        }
        if let Ok(value) = std::env::var("MERCADO_CURRENCY_SYMBOL") {
            self.currency_symbol = value;
        }
        if let Ok(value) = std::env::var("MERCADO_OWNER_USERNAME") {
            self.owner_username = value;
        }
        if let Ok(value) = std::env::var("MERCADO_OWNER_PASSWORD") {
            self.owner_password = value;
        }
    }

    /// Checks the owner gate. Plaintext comparison; a toy gate.
    pub fn owner_gate_matches(&self, username: &str, password: &str) -> bool {
        username == self.owner_username && password == self.owner_password
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use mercado_console::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.store_name, "Vitor's Market");
        assert!(config.owner_gate_matches("@dono", "123456"));
    }

    #[test]
    fn test_owner_gate_rejects_wrong_credentials() {
        let config = Config::default();
        assert!(!config.owner_gate_matches("@dono", "wrong"));
        assert!(!config.owner_gate_matches("someone", "123456"));
        assert!(!config.owner_gate_matches("", ""));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("store_name = \"Corner Shop\"").unwrap();
        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.owner_username, "@dono");
    }

    #[test]
    fn test_full_toml() {
        let raw = r#"
            store_name = "Corner Shop"
            currency_symbol = "R$"
            currency_decimals = 2
            owner_username = "boss"
            owner_password = "hunter2"
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.currency_symbol, "R$");
        assert!(config.owner_gate_matches("boss", "hunter2"));
    }

    #[test]
    fn test_format_currency_positive() {
        let config = Config::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(100), "$1.00");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = Config::default();
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }

    #[test]
    fn test_format_currency_zero_decimals() {
        let config = Config {
            currency_decimals: 0,
            ..Config::default()
        };
        assert_eq!(config.format_currency(1234), "$1234");
    }
}
