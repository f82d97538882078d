//! Configuration loading and typed config structures for the lunar calendar.
//!
//! The canonical configuration lives in `lunar-config.yaml` at the project
//! root. Every section is optional; a missing file section falls back to the
//! Moscow defaults (UTC+3, observer on `0.0.0.0:8080`, `info` logging, empty
//! profile and forecast).

use std::path::Path;

use chrono::FixedOffset;
use lunar_types::{UserProfile, WeatherDay};
use serde::Deserialize;

/// Largest accepted distance from UTC, in hours.
pub const MAX_UTC_OFFSET_HOURS: i32 = 18;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// Parsed values are out of range.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// What was rejected.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the structure of `lunar-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LunarConfig {
    /// Where "today" is evaluated.
    #[serde(default)]
    pub location: LocationConfig,

    /// HTTP API bind address.
    #[serde(default)]
    pub observer: ObserverConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Initial user profile; edits through the API are kept in memory.
    #[serde(default)]
    pub profile: UserProfile,

    /// Forecast days served by the API, in date order.
    #[serde(default)]
    pub forecast: Vec<WeatherDay>,
}

impl LunarConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override the observer bind address:
    /// - `LUNAR_HOST` overrides `observer.host`
    /// - `LUNAR_PORT` overrides `observer.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty mapping.
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.observer.apply_env_overrides()?;
        config.location.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Location used to resolve the current civil date.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationConfig {
    /// Display name of the city.
    #[serde(default = "default_location_name")]
    pub name: String,

    /// Fixed offset from UTC in whole hours.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
}

impl LocationConfig {
    /// The configured offset as a chrono [`FixedOffset`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the offset is beyond
    /// [`MAX_UTC_OFFSET_HOURS`].
    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        self.validate()?;
        self.utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| self.offset_error())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.utc_offset_hours.unsigned_abs() > MAX_UTC_OFFSET_HOURS.unsigned_abs() {
            return Err(self.offset_error());
        }
        Ok(())
    }

    fn offset_error(&self) -> ConfigError {
        ConfigError::Invalid {
            reason: format!(
                "location.utc_offset_hours {} is outside -{MAX_UTC_OFFSET_HOURS}..={MAX_UTC_OFFSET_HOURS}",
                self.utc_offset_hours
            ),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            name: default_location_name(),
            utc_offset_hours: default_utc_offset_hours(),
        }
    }
}

/// HTTP API bind address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObserverConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ObserverConfig {
    /// Apply `LUNAR_HOST` and `LUNAR_PORT` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `LUNAR_PORT` is not a valid port.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("LUNAR_HOST") {
            self.host = val;
        }
        if let Ok(val) = std::env::var("LUNAR_PORT") {
            self.port = val.parse().map_err(|e| ConfigError::Invalid {
                reason: format!("LUNAR_PORT {val:?} is not a valid port: {e}"),
            })?;
        }
        Ok(())
    }

    /// `host:port` string accepted by `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_location_name() -> String {
    "Moscow".to_owned()
}

const fn default_utc_offset_hours() -> i32 {
    3
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_owned()
}
