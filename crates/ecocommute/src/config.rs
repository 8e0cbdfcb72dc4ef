//! Configuration management for ecocommute.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "ecocommute";

/// Default export file name.
const EXPORT_FILE_NAME: &str = "my_eco_report.csv";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `ECOCOMMUTE_`, nested keys
///    separated by `__`)
/// 2. TOML config file at `~/.config/ecocommute/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bounds applied to legs entered into a session.
    pub limits: LimitsConfig,
    /// Report presentation settings.
    pub report: ReportConfig,
    /// Export settings.
    pub export: ExportConfig,
}

/// Input bounds for a single leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Shortest accepted leg, in km.
    pub min_distance_km: f64,
    /// Longest accepted leg, in km.
    pub max_distance_km: f64,
    /// Most occupants accepted for one vehicle, driver included.
    pub max_passengers: u32,
}

/// Report presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Pause before printing insights, in milliseconds.
    pub insight_delay_ms: u64,
    /// Include insights in text reports.
    pub show_insights: bool,
}

/// Export settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Where CSV exports are written.
    /// Defaults to `my_eco_report.csv` in the working directory.
    pub path: Option<PathBuf>,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            min_distance_km: 0.1,
            max_distance_km: 100.0,
            max_passengers: 6,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            insight_delay_ms: 0,
            show_insights: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("ECOCOMMUTE_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let limits = &self.limits;

        if !(limits.min_distance_km.is_finite() && limits.min_distance_km > 0.0) {
            return Err(Error::ConfigValidation {
                message: format!(
                    "min_distance_km must be greater than 0, got {}",
                    limits.min_distance_km
                ),
            });
        }

        if !limits.max_distance_km.is_finite() || limits.min_distance_km > limits.max_distance_km
        {
            return Err(Error::ConfigValidation {
                message: format!(
                    "min_distance_km ({}) cannot be greater than max_distance_km ({})",
                    limits.min_distance_km, limits.max_distance_km
                ),
            });
        }

        if limits.max_passengers == 0 {
            return Err(Error::ConfigValidation {
                message: "max_passengers must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Get the export path, resolving defaults if not set.
    #[must_use]
    pub fn export_path(&self) -> PathBuf {
        self.export
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME))
    }

    /// Get the insight delay as a Duration.
    #[must_use]
    pub fn insight_delay(&self) -> Duration {
        Duration::from_millis(self.report.insight_delay_ms)
    }
}
