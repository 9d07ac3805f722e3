//! Configuration management for the application.
//!
//! Loads, validates, and saves the application configuration in TOML
//! format with platform-specific directory resolution. The customization
//! state itself lives in the storage layer, not here; this file only
//! holds preferences such as the default output language and an optional
//! data directory override.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::prompt::PromptCopy;

/// File system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Override for the customization data directory. When unset, the
    /// platform default under the config directory is used.
    pub data_dir: Option<PathBuf>,
}

/// Prompt generation preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Default output language tag (e.g. "en", "zh-TW")
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/SlidePromptStudio/config.toml`
/// - macOS: `~/Library/Application Support/SlidePromptStudio/config.toml`
/// - Windows: `%APPDATA%\SlidePromptStudio\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub storage: StorageConfig,
    /// Prompt preferences
    #[serde(default)]
    pub prompt: PromptConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("SlidePromptStudio");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Resolves the customization data directory: the configured
    /// override, or `state/` under the config directory.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::config_dir()?.join("state")),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `language` has a shipped copy record (unknown tags would
    ///   silently fall back to English, better to reject them here)
    /// - `data_dir`, if set and existing, is a directory
    pub fn validate(&self) -> Result<()> {
        let languages = PromptCopy::supported_languages()?;
        if !languages.iter().any(|l| l == &self.prompt.language) {
            anyhow::bail!(
                "Unsupported output language: {} (supported: {})",
                self.prompt.language,
                languages.join(", ")
            );
        }

        if let Some(data_dir) = &self.storage.data_dir {
            if data_dir.exists() && !data_dir.is_dir() {
                anyhow::bail!(
                    "Data directory path is not a directory: {}",
                    data_dir.display()
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.prompt.language, "en");
        assert_eq!(config.storage.data_dir, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_language() {
        let mut config = Config::new();
        config.prompt.language = "zh-TW".to_string();
        assert!(config.validate().is_ok());

        config.prompt.language = "klingon".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::new();

        // Non-existent override is fine; it gets created on first use
        config.storage.data_dir = Some(temp_dir.path().join("missing"));
        assert!(config.validate().is_ok());

        // Existing directory is fine
        config.storage.data_dir = Some(temp_dir.path().to_path_buf());
        assert!(config.validate().is_ok());

        // A file is not
        let file_path = temp_dir.path().join("file");
        fs::write(&file_path, "").unwrap();
        config.storage.data_dir = Some(file_path);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.prompt.language = "ja".to_string();
        config.storage.data_dir = Some(PathBuf::from("/tmp/slideprompt-state"));

        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_defaults_for_missing_sections() {
        let loaded: Config = toml::from_str("").unwrap();
        assert_eq!(loaded, Config::new());

        let loaded: Config = toml::from_str("[prompt]\n").unwrap();
        assert_eq!(loaded.prompt.language, "en");
    }
}
