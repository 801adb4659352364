use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// Name of the environment variable holding the OpenWeather API key.
/// Takes precedence over the config file.
pub const API_KEY_ENV_VAR: &str = "WEATHER_KEY";

/// On-disk configuration, stored as TOML in the platform config directory.
///
/// Example:
/// ```toml
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Pick the API key to use: environment variable first, then config file.
///
/// An unset key resolves to an empty string rather than an error. The first
/// network call then fails with the provider's auth rejection, which the
/// pipeline classifies as fatal; nothing is validated up front.
pub fn resolve_api_key(env_value: Option<String>, config: &Config) -> String {
    if let Some(key) = env_value.filter(|k| !k.is_empty()) {
        return key;
    }

    match &config.api_key {
        Some(key) => key.clone(),
        None => {
            debug!("no API key in environment or config file");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_value_takes_precedence() {
        let cfg = Config { api_key: Some("FILE_KEY".to_string()) };

        let key = resolve_api_key(Some("ENV_KEY".to_string()), &cfg);

        assert_eq!(key, "ENV_KEY");
    }

    #[test]
    fn config_file_used_when_env_unset() {
        let cfg = Config { api_key: Some("FILE_KEY".to_string()) };

        assert_eq!(resolve_api_key(None, &cfg), "FILE_KEY");
    }

    #[test]
    fn empty_env_value_falls_through_to_config() {
        let cfg = Config { api_key: Some("FILE_KEY".to_string()) };

        assert_eq!(resolve_api_key(Some(String::new()), &cfg), "FILE_KEY");
    }

    #[test]
    fn missing_key_resolves_to_empty_string() {
        let cfg = Config::default();

        assert_eq!(resolve_api_key(None, &cfg), "");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let cfg = Config { api_key: Some("KEY".to_string()) };

        let toml = toml::to_string(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.api_key.as_deref(), Some("KEY"));
    }
}
