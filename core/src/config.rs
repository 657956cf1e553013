//! Configuration loading.
//!
//! An optional TOML file at `<config_dir>/timeregistrering/config.toml`,
//! with environment variables taking precedence over it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

const APP_DIR: &str = "timeregistrering";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_FILE_NAME: &str = "timeregistrering.log";

pub const LOG_FILTER_ENV: &str = "TIMEREGISTRERING_LOG";
pub const LOG_FILE_ENV: &str = "TIMEREGISTRERING_LOG_FILE";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `timesheet_core=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Where the TUI writes its log. Non-interactive commands log to stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_DIR).join(CONFIG_FILE_NAME))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Explicit path must exist; the default location is optional.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    pub fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = var(LOG_FILTER_ENV) {
            self.logging.level = level;
        }
        if let Some(file) = var(LOG_FILE_ENV) {
            self.logging.file = Some(PathBuf::from(file));
        }
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.logging
            .file
            .clone()
            .or_else(|| dirs::data_local_dir().map(|p| p.join(APP_DIR).join(LOG_FILE_NAME)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_parse_logging_section() {
        let config = Config::from_toml("[logging]\nlevel = \"debug\"\nfile = \"/tmp/ts.log\"\n").unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.log_file(), Some(PathBuf::from("/tmp/ts.log")));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(Config::from_toml("[logging\nlevel=").is_err());
        assert!(Config::from_toml("[logging]\nlevel = 3\n").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(|name| match name {
            LOG_FILTER_ENV => Some("trace".to_string()),
            _ => None,
        });
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.file, None);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let path = std::env::temp_dir().join("timeregistrering-missing-config.toml");
        assert!(Config::load(&path).is_err());
    }
}
