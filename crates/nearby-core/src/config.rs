// Rust guideline compliant 2026-10-19

//! Configuration management for the directory engine.

use crate::{Result, SortKey};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for listing behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Radius applied when the user has not picked one.
    #[serde(default = "default_radius_km")]
    pub default_radius_km: f64,

    /// Sort key applied when the user has not picked one.
    #[serde(default)]
    pub default_sort: SortKey,

    /// Candidate count at which filtering switches to parallel evaluation.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,

    /// Base URL for map-directions links.
    #[serde(default = "default_maps_base_url")]
    pub maps_base_url: String,

    /// Log level for the tracing subscriber.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Level names accepted for `log_level`, matched case-insensitively.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

fn default_radius_km() -> f64 {
    10.0
}

fn default_parallel_threshold() -> usize {
    1_000
}

fn default_maps_base_url() -> String {
    "https://www.google.com/maps/dir/".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_radius_km: default_radius_km(),
            default_sort: SortKey::default(),
            parallel_threshold: default_parallel_threshold(),
            maps_base_url: default_maps_base_url(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/config.toml`
    /// 3. Environment variables with `NEARBY_` prefix
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory holding `config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| crate::Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        tracing::debug!(
            radius_km = config.default_radius_km,
            sort = ?config.default_sort,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `NEARBY_DEFAULT_RADIUS_KM` - Default radius in km
    /// - `NEARBY_DEFAULT_SORT` - Default sort key (distance/price/rating)
    /// - `NEARBY_PARALLEL_THRESHOLD` - Parallel filtering threshold
    /// - `NEARBY_MAPS_BASE_URL` - Base URL for directions links
    /// - `NEARBY_LOG_LEVEL` - Log level
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("NEARBY_DEFAULT_RADIUS_KM") {
            self.default_radius_km = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "NEARBY_DEFAULT_RADIUS_KM must be a number".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("NEARBY_DEFAULT_SORT") {
            self.default_sort = match val.to_lowercase().as_str() {
                "distance" => SortKey::Distance,
                "price" => SortKey::Price,
                "rating" => SortKey::Rating,
                _ => {
                    return Err(crate::Error::InvalidConfig(
                        "NEARBY_DEFAULT_SORT must be distance, price, or rating".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("NEARBY_PARALLEL_THRESHOLD") {
            self.parallel_threshold = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "NEARBY_PARALLEL_THRESHOLD must be a positive number".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("NEARBY_MAPS_BASE_URL") {
            self.maps_base_url = val;
        }

        if let Ok(val) = std::env::var("NEARBY_LOG_LEVEL") {
            self.log_level = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - default_radius_km is not a positive finite number
    /// - parallel_threshold is zero
    /// - maps_base_url is not an absolute URL
    /// - log_level is not one of [`LOG_LEVELS`]
    pub fn validate(&self) -> Result<()> {
        if !self.default_radius_km.is_finite() || self.default_radius_km <= 0.0 {
            return Err(crate::Error::InvalidConfig(format!(
                "default_radius_km must be greater than 0, got {}",
                self.default_radius_km
            )));
        }

        if self.parallel_threshold == 0 {
            return Err(crate::Error::InvalidConfig(
                "parallel_threshold must be greater than 0".to_string(),
            ));
        }

        url::Url::parse(&self.maps_base_url).map_err(|e| {
            crate::Error::InvalidConfig(format!(
                "maps_base_url is not a valid URL ({}): {}",
                self.maps_base_url, e
            ))
        })?;

        let level = self.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(crate::Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to `<dir>/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, dir: &Path) -> Result<()> {
        let config_path = dir.join("config.toml");
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
