//! Application configuration: which external tools to drive and how to
//! present notifications.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// External commands the front-end invokes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Executable invoked as `<search_program> search <keywords>`.
    pub search_program: String,
    /// Executable invoked as `<source_program> source --download-only <name>`.
    pub source_program: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            search_program: "apt".to_string(),
            source_program: "apt-get".to_string(),
        }
    }
}

/// Notification presentation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Toast lifetime in seconds for events without their own hint.
    pub default_secs: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self { default_secs: 4 }
    }
}

impl NotifyConfig {
    /// Default display duration for notifications without a hint.
    #[must_use]
    pub const fn default_duration(&self) -> Duration {
        Duration::from_secs(self.default_secs)
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tools: ToolsConfig,
    pub notify: NotifyConfig,
}

impl AppConfig {
    /// Default config file location, e.g. `~/.config/aptsrc/config.toml`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("aptsrc")
            .join("config.toml")
    }

    /// Loads the config from `path`, writing a template with the default
    /// values on first run.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or
    /// parsed, or when the template cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let text = fs::read_to_string(path)?;
            Ok(toml::from_str(&text)?)
        } else {
            let config = Self::default();
            config.save(path)?;
            Ok(config)
        }
    }

    /// Writes the config as TOML, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn defaults_point_at_apt() {
        let config = AppConfig::default();
        assert_eq!(config.tools.search_program, "apt");
        assert_eq!(config.tools.source_program, "apt-get");
        assert_eq!(config.notify.default_duration(), Duration::from_secs(4));
    }

    #[test]
    fn load_or_create_writes_template_on_first_run() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = AppConfig::load_or_create(&path).unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn load_or_create_reads_back_saved_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.tools.search_program = "apt-cache".to_string();
        config.notify.default_secs = 9;
        config.save(&path).unwrap();

        let loaded = AppConfig::load_or_create(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[tools]\nsearch_program = \"apt-mirror\"\n").unwrap();

        let loaded = AppConfig::load_or_create(&path).unwrap();
        assert_eq!(loaded.tools.search_program, "apt-mirror");
        assert_eq!(loaded.tools.source_program, "apt-get");
        assert_eq!(loaded.notify, NotifyConfig::default());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not valid toml [").unwrap();

        assert!(AppConfig::load_or_create(&path).is_err());
    }
}
