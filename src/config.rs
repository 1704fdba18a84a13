//! Configuration module
//!
//! Settings are read from a TOML file
//! (`~/.config/rental-service/config.toml` by default). Every section and
//! key is optional; anything missing falls back to [`AppConfig::defaults`].
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [logging]
//! level = "debug"
//! format = "json"
//!
//! [[fleet]]
//! name = "Peugeot 208"
//! category = "Economy"
//! rate_per_day = 45
//! ```

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Default location of the configuration file
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rental-service")
        .join("config.toml")
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    /// Items registered at startup, in this order
    pub fleet: Vec<FleetItem>,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            shutdown_timeout: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// One item of the startup fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetItem {
    pub name: String,
    pub category: String,
    pub rate_per_day: Decimal,
}

impl FleetItem {
    pub fn new(name: &str, category: &str, rate_per_day: Decimal) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            rate_per_day,
        }
    }
}

/// The demo fleet used when no `[[fleet]]` entries are configured
pub fn demo_fleet() -> Vec<FleetItem> {
    vec![
        FleetItem::new("Peugeot 208", "Economy", Decimal::new(45, 0)),
        FleetItem::new("BMW X5", "SUV", Decimal::new(120, 0)),
        FleetItem::new("Tesla Model 3", "Electric", Decimal::new(150, 0)),
    ]
}

impl AppConfig {
    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::defaults());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Built-in settings including the demo fleet
    pub fn defaults() -> Self {
        Self::default().with_default_fleet()
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        let cfg: Self = toml::from_str(raw)?;
        Ok(cfg.with_default_fleet())
    }

    fn with_default_fleet(mut self) -> Self {
        if self.fleet.is_empty() {
            self.fleet = demo_fleet();
        }
        self
    }

    /// Reject settings the service cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid("server.host must not be empty".into()));
        }
        if !matches!(self.logging.format.to_lowercase().as_str(), "text" | "json") {
            return Err(ConfigError::Invalid(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }
        for (idx, item) in self.fleet.iter().enumerate() {
            if item.name.trim().is_empty() || item.category.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "fleet[{}]: name and category must not be empty",
                    idx
                )));
            }
            if item.rate_per_day.is_sign_negative() && !item.rate_per_day.is_zero() {
                return Err(ConfigError::Invalid(format!(
                    "fleet[{}] ({}): rate_per_day must not be negative",
                    idx, item.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults_and_demo_fleet() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg.server.address(), "127.0.0.1:5000");
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.fleet, demo_fleet());
        cfg.validate().unwrap();
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
            [server]
            port = 8080

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.shutdown_timeout, 30);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.format, "json");
    }

    #[test]
    fn configured_fleet_replaces_demo_fleet() {
        let cfg = AppConfig::from_toml(
            r#"
            [[fleet]]
            name = "Fiat 500"
            category = "City"
            rate_per_day = 30.5

            [[fleet]]
            name = "Volvo XC90"
            category = "SUV"
            rate_per_day = "140"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.fleet.len(), 2);
        assert_eq!(cfg.fleet[0].name, "Fiat 500");
        assert_eq!(cfg.fleet[0].rate_per_day, Decimal::new(305, 1));
        assert_eq!(cfg.fleet[1].rate_per_day, Decimal::new(140, 0));
    }

    #[test]
    fn negative_fleet_rate_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.fleet = vec![FleetItem::new("Broken", "Misc", Decimal::new(-1, 0))];
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("rate_per_day"));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.logging.format = "xml".into();
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(AppConfig::from_toml("[server\nport = ").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = AppConfig::load(Path::new("/definitely/not/here/config.toml")).unwrap();
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.fleet.len(), 3);
    }
}
