mod config;
pub mod database;

pub use config::{Config, WeatherConfig};
pub use database::Database;

use std::path::PathBuf;

use crate::error::StorageError;

/// Abstract key-value persistence capability.
///
/// The hydration ledger (and any collaborator keeping state next to it)
/// depends only on this seam, not on a specific storage technology.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Returns `~/.config/vitals[-dev]/` based on VITALS_ENV.
///
/// Set VITALS_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("VITALS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("vitals-dev")
    } else {
        base_dir.join("vitals")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
