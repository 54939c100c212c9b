//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Display name for the greeting banner
//! - Daily hydration goal and default intake increment
//! - OpenWeather API key and coordinates for the weather client
//!
//! Configuration is stored at `~/.config/vitals/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;
use crate::hydration::{DEFAULT_GOAL_ML, DEFAULT_PENDING_ML};

/// Weather client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeather One Call API key. Empty means the weather client is
    /// unavailable; the engine keeps working without readings.
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/vitals/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name shown next to the greeting line; empty hides it.
    #[serde(default)]
    pub user_name: String,
    #[serde(default = "default_daily_goal_ml")]
    pub daily_goal_ml: u32,
    /// Seed for the hydration pending amount; 250 when unset.
    #[serde(default = "default_amount_ml")]
    pub default_amount_ml: u32,
    #[serde(default)]
    pub weather: WeatherConfig,
}

fn default_daily_goal_ml() -> u32 {
    DEFAULT_GOAL_ML
}
fn default_amount_ml() -> u32 {
    DEFAULT_PENDING_ML
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            daily_goal_ml: default_daily_goal_ml(),
            default_amount_ml: default_amount_ml(),
            weather: WeatherConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}
