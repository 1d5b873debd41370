//! Configuration for the Onboard system, loadable from TOML.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{OnboardError, OnboardResult};

/// Top-level configuration. Every section has sensible defaults so an empty
/// file (or no file) is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardConfig {
    pub database: DatabaseConfig,
    pub model: ModelConfig,
    pub server: ServerConfig,
}

/// SQLite database location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

/// Locations of the trained model artifacts. Both must load for the
/// model-backed classifier to activate; otherwise the rule-based path runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub classifier_path: PathBuf,
    pub scaler_path: PathBuf,
}

/// HTTP server bind address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(defaults::DEFAULT_DATABASE_PATH),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            classifier_path: PathBuf::from(defaults::DEFAULT_CLASSIFIER_PATH),
            scaler_path: PathBuf::from(defaults::DEFAULT_SCALER_PATH),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl OnboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> OnboardResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| OnboardError::InvalidConfig {
            reason: format!("{}: {e}", path.display()),
        })?;
        toml::from_str(&raw).map_err(|e| OnboardError::InvalidConfig {
            reason: format!("{}: {e}", path.display()),
        })
    }
}
