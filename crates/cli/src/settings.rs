//! Application settings

use feature_engine::DEFAULT_WORD_WIDTH;
use serde::{Deserialize, Serialize};
use std::path::Path;
use storage::DEFAULT_CACHE_CAPACITY;
use thiserror::Error;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "symdyn";

/// Environment variable prefix, e.g. `SYMDYN_WORD_WIDTH=4`
pub const ENV_PREFIX: &str = "SYMDYN";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Word width `m` for the symbolic encoder
    pub word_width: usize,
    /// Signals taken per label when building a dataset
    pub dataset_limit: usize,
    /// Maximum number of cached feature vectors
    pub cache_capacity: usize,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            word_width: DEFAULT_WORD_WIDTH,
            dataset_limit: 10,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl AppConfig {
    /// Load defaults, then the config file, then `SYMDYN_*` variables.
    ///
    /// An explicit `path` must exist; the default `symdyn.{toml,json,yaml}`
    /// is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.log_level()?;
        Ok(config)
    }

    /// Parsed log level
    pub fn log_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}
