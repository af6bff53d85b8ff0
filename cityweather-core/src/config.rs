use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "CITYWEATHER_API_KEY";

/// Default OpenWeather endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// # base_url = "https://api.openweathermap.org"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_key: Option<String>,

    /// Override for the provider endpoint root, mostly useful for testing.
    pub base_url: Option<String>,
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

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = project_dirs().ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// API key to send, preferring the environment over the file.
    ///
    /// A missing key resolves to an empty string; the provider then rejects the
    /// request and the user sees the invalid-key error.
    pub fn resolved_api_key(&self) -> String {
        self.resolve_api_key_from(env::var(API_KEY_ENV).ok())
    }

    fn resolve_api_key_from(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone())
            .unwrap_or_default()
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "cityweather", "cityweather")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_resolves_to_empty() {
        let cfg = Config::default();
        assert_eq!(cfg.resolve_api_key_from(None), "");
    }

    #[test]
    fn env_key_overrides_file_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        assert_eq!(cfg.resolve_api_key_from(Some("ENV_KEY".into())), "ENV_KEY");
        assert_eq!(cfg.resolve_api_key_from(None), "FILE_KEY");
    }

    #[test]
    fn blank_env_key_is_ignored() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        assert_eq!(cfg.resolve_api_key_from(Some("  ".into())), "FILE_KEY");
    }

    #[test]
    fn base_url_defaults_to_openweather() {
        let mut cfg = Config::default();
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);

        cfg.base_url = Some("http://127.0.0.1:9000".into());
        assert_eq!(cfg.base_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn parses_toml() {
        let cfg: Config = toml::from_str("api_key = \"abc\"\n").unwrap();
        assert_eq!(cfg.api_key.as_deref(), Some("abc"));
        assert!(cfg.base_url.is_none());
    }
}
