//! Environment-driven service configuration.

use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_RULE_SET_PATH: &str = "data/RuleSet.json";
pub const DEFAULT_SIGNALS_PATH: &str = "data/raw_data.json";

/// Name of the running environment (`APP_ENV`), defaults to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .ok()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub rule_set_path: PathBuf,
    pub signals_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rule_set_path: PathBuf::from(DEFAULT_RULE_SET_PATH),
            signals_path: PathBuf::from(DEFAULT_SIGNALS_PATH),
        }
    }
}

impl Config {
    /// Build the configuration from `PORT`, `RULE_SET_PATH` and `SIGNALS_PATH`.
    ///
    /// Unset variables fall back to the defaults; a set but unparseable
    /// port is an error rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT").filter(|p| !p.trim().is_empty()) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(path) = lookup("RULE_SET_PATH").filter(|p| !p.trim().is_empty()) {
            config.rule_set_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("SIGNALS_PATH").filter(|p| !p.trim().is_empty()) {
            config.signals_path = PathBuf::from(path);
        }

        Ok(config)
    }
}
