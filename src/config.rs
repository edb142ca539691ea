//! TOML-based service configuration.

use std::fs;
use std::net::IpAddr;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Log levels accepted in `[logging] level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Largest rounding precision accepted in `[plan] decimals`.
pub const MAX_DECIMALS: u32 = 6;

/// Top-level service configuration parsed from TOML.
///
/// All sections are optional and default to the values below. Load from TOML
/// with [`ServiceConfig::from_toml_file`] or use [`ServiceConfig::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Plan output settings.
    #[serde(default)]
    pub plan: PlanConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface address to bind.
    pub host: String,
    /// TCP port (must be > 0).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8888,
        }
    }
}

/// Plan output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanConfig {
    /// Decimal places kept in reported production values.
    pub decimals: u32,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self { decimals: 1 }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("config", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let s = &self.server;
        if s.host.parse::<IpAddr>().is_err() {
            errors.push(ConfigError::new(
                "server.host",
                format!("must be an IP address, got \"{}\"", s.host),
            ));
        }
        if s.port == 0 {
            errors.push(ConfigError::new("server.port", "must be > 0"));
        }

        if self.plan.decimals > MAX_DECIMALS {
            errors.push(ConfigError::new(
                "plan.decimals",
                format!("must be <= {MAX_DECIMALS}"),
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigError::new(
                "logging.level",
                format!(
                    "must be one of {}, got \"{}\"",
                    LOG_LEVELS.join(", "),
                    self.logging.level
                ),
            ));
        }

        errors
    }
}
