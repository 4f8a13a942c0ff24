//! Cart storage configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MERCADO_STORAGE_DIR` - Directory for the file-backed blob store
//!   (default: `./data`)
//! - `MERCADO_STORAGE_KEY` - Storage key the serialized cart lives under
//!   (default: `cart.v1`)

use std::path::PathBuf;

use thiserror::Error;

use crate::store::DEFAULT_STORAGE_KEY;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart persistence configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Directory the file-backed blob store writes under.
    pub storage_dir: PathBuf,
    /// Key the serialized cart is stored under.
    pub storage_key: String,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_dir = get_env_or_default("MERCADO_STORAGE_DIR", "./data")?;
        let storage_key = get_env_or_default("MERCADO_STORAGE_KEY", DEFAULT_STORAGE_KEY)?;

        Ok(Self {
            storage_dir: PathBuf::from(storage_dir),
            storage_key,
        })
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./data"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

/// Get an environment variable with a default value, rejecting
/// set-but-empty values.
fn get_env_or_default(key: &str, default: &str) -> Result<String, ConfigError> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        )),
        Ok(value) => Ok(value),
        Err(_) => Ok(default.to_string()),
    }
}
