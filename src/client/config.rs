use std::path::PathBuf;
use std::str::FromStr;

use dioxus_logger::tracing::Level;

use crate::client::error::config::ConfigError;

pub const API_URL_VAR: &str = "FLEETDESK_API_URL";
pub const SESSION_DIR_VAR: &str = "FLEETDESK_SESSION_DIR";
pub const LOG_LEVEL_VAR: &str = "FLEETDESK_LOG_LEVEL";

pub struct Config {
    /// Base URL of the fleet API, e.g. `https://fleet.example.com/api`
    pub api_url: String,
    /// Directory the session is persisted in, `None` for the platform default
    pub session_dir: Option<PathBuf>,
    pub log_level: Level,
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(API_URL_VAR)
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(API_URL_VAR.to_string()))?;

        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvValue {
                var: API_URL_VAR.to_string(),
                reason: "expected an http:// or https:// URL".to_string(),
            });
        }

        let session_dir = lookup(SESSION_DIR_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let log_level = match lookup(LOG_LEVEL_VAR) {
            None => Level::WARN,
            Some(value) => {
                Level::from_str(value.trim()).map_err(|e| ConfigError::InvalidEnvValue {
                    var: LOG_LEVEL_VAR.to_string(),
                    reason: e.to_string(),
                })?
            }
        };

        Ok(Self {
            api_url,
            session_dir,
            log_level,
        })
    }
}
