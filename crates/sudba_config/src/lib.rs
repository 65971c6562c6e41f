//! Configuration for the sudba tools.
//!
//! ```toml
//! [lunar]
//! refresh_interval_secs = 600
//! outlook_days = 3
//!
//! [logging]
//! filter = "info"
//! ```
//!
//! Every section and key is optional; missing values take their defaults.

pub mod error;

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Default lunar refresh period (10 minutes).
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 600;
/// Default length of the forecast strip.
pub const DEFAULT_OUTLOOK_DAYS: u32 = 3;
/// Longest forecast strip accepted.
pub const MAX_OUTLOOK_DAYS: u32 = 30;
/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SudbaConfig {
    pub lunar: LunarConfig,
    pub logging: LoggingConfig,
}

/// Lunar clock scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LunarConfig {
    /// Seconds between recomputations in watch mode.
    pub refresh_interval_secs: u64,
    /// Days in the forecast strip.
    pub outlook_days: u32,
}

impl Default for LunarConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            outlook_days: DEFAULT_OUTLOOK_DAYS,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SudbaConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Load `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lunar.refresh_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "lunar.refresh_interval_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !(1..=MAX_OUTLOOK_DAYS).contains(&self.lunar.outlook_days) {
            return Err(ConfigError::Invalid {
                field: "lunar.outlook_days",
                reason: format!(
                    "{} not in 1..={MAX_OUTLOOK_DAYS}",
                    self.lunar.outlook_days
                ),
            });
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "logging.filter",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Refresh period as a `Duration`.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.lunar.refresh_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn defaults() {
        let c = SudbaConfig::default();
        assert_eq!(c.lunar.refresh_interval_secs, 600);
        assert_eq!(c.lunar.outlook_days, 3);
        assert_eq!(c.logging.filter, "info");
        assert_eq!(c.refresh_interval(), Duration::from_secs(600));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_text_is_default() {
        assert_eq!(SudbaConfig::parse("").unwrap(), SudbaConfig::default());
    }

    #[test]
    fn partial_section() {
        let c = SudbaConfig::parse("[lunar]\noutlook_days = 7\n").unwrap();
        assert_eq!(c.lunar.outlook_days, 7);
        assert_eq!(c.lunar.refresh_interval_secs, DEFAULT_REFRESH_INTERVAL_SECS);
        assert_eq!(c.logging, LoggingConfig::default());
    }

    #[test]
    fn full_file() {
        let c = SudbaConfig::parse(
            r#"
[lunar]
refresh_interval_secs = 60
outlook_days = 5

[logging]
filter = "sudba=debug"
"#,
        )
        .unwrap();
        assert_eq!(c.refresh_interval(), Duration::from_secs(60));
        assert_eq!(c.lunar.outlook_days, 5);
        assert_eq!(c.logging.filter, "sudba=debug");
    }

    #[test]
    fn zero_interval_rejected() {
        let err = SudbaConfig::parse("[lunar]\nrefresh_interval_secs = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "lunar.refresh_interval_secs",
                ..
            }
        ));
    }

    #[test]
    fn outlook_out_of_range_rejected() {
        assert!(SudbaConfig::parse("[lunar]\noutlook_days = 0\n").is_err());
        assert!(SudbaConfig::parse("[lunar]\noutlook_days = 31\n").is_err());
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let err = SudbaConfig::parse("[lunar]\noutlook_days = \"three\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"[logging]\nfilter = \"warn\"\n").unwrap();
        let c = SudbaConfig::load(f.path()).unwrap();
        assert_eq!(c.logging.filter, "warn");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SudbaConfig::load(Path::new("/nonexistent/sudba.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_or_default_without_path() {
        assert_eq!(
            SudbaConfig::load_or_default(None).unwrap(),
            SudbaConfig::default()
        );
    }
}
