//! Global configuration management
//!
//! User settings live in ~/.txmerkle/config.toml. The `TXMERKLE_CONFIG`
//! environment variable points at an alternative file.

use crate::core::error::{MerkleError, Result};
use crate::render::{RenderOptions, TreeStyle, DEFAULT_SHORT_HASH_LEN};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "TXMERKLE_CONFIG";

/// Global configuration for txmerkle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Tree and proof rendering
    pub display: DisplayConfig,
    /// Command output
    pub output: OutputConfig,
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Hex characters shown for shortened digests
    pub short_hash_len: usize,
    /// Default tree layout
    pub style: TreeStyle,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Proof output format: json or text
    pub format: String,
    /// Color output: auto, always, never
    pub color: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            short_hash_len: DEFAULT_SHORT_HASH_LEN,
            style: TreeStyle::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            color: "auto".to_string(),
        }
    }
}

/// Configuration value types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    String(String),
    Number(i64),
    Boolean(bool),
}

impl ConfigValue {
    /// Interpret command line text as the most specific value type
    pub fn parse(raw: &str) -> Self {
        if let Ok(n) = raw.parse::<i64>() {
            return ConfigValue::Number(n);
        }
        match raw {
            "true" => ConfigValue::Boolean(true),
            "false" => ConfigValue::Boolean(false),
            _ => ConfigValue::String(raw.to_string()),
        }
    }
}

impl std::fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigValue::String(s) => f.write_str(s),
            ConfigValue::Number(n) => write!(f, "{}", n),
            ConfigValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Configuration key for getting and setting values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    DisplayShortHashLen,
    DisplayStyle,
    OutputFormat,
    OutputColor,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::DisplayShortHashLen,
        ConfigKey::DisplayStyle,
        ConfigKey::OutputFormat,
        ConfigKey::OutputColor,
    ];

    pub fn from_str(key: &str) -> Option<Self> {
        match key {
            "display.short_hash_len" => Some(ConfigKey::DisplayShortHashLen),
            "display.style" => Some(ConfigKey::DisplayStyle),
            "output.format" => Some(ConfigKey::OutputFormat),
            "output.color" => Some(ConfigKey::OutputColor),
            _ => None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            ConfigKey::DisplayShortHashLen => "display.short_hash_len",
            ConfigKey::DisplayStyle => "display.style",
            ConfigKey::OutputFormat => "output.format",
            ConfigKey::OutputColor => "output.color",
        }
    }
}

impl GlobalConfig {
    /// Load global configuration from disk
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Load configuration from a specific file, defaulting when it is missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: GlobalConfig = toml::from_str(&content).map_err(|e| {
            MerkleError::configuration(format!("Failed to parse config: {}", e))
        })?;

        Ok(config)
    }

    /// Save global configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            MerkleError::configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Get the path to the global configuration file
    pub fn get_config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let user_dirs = UserDirs::new().ok_or(MerkleError::HomeDirectoryNotFound)?;
        Ok(user_dirs.home_dir().join(".txmerkle").join("config.toml"))
    }

    /// Get a configuration value
    pub fn get(&self, key: ConfigKey) -> ConfigValue {
        match key {
            ConfigKey::DisplayShortHashLen => {
                ConfigValue::Number(self.display.short_hash_len as i64)
            }
            ConfigKey::DisplayStyle => ConfigValue::String(self.display.style.to_string()),
            ConfigKey::OutputFormat => ConfigValue::String(self.output.format.clone()),
            ConfigKey::OutputColor => ConfigValue::String(self.output.color.clone()),
        }
    }

    /// Set a configuration value
    pub fn set(&mut self, key: ConfigKey, value: ConfigValue) -> Result<()> {
        match (key, value) {
            (ConfigKey::DisplayShortHashLen, ConfigValue::Number(n)) if n > 0 => {
                self.display.short_hash_len = n as usize;
            }
            (ConfigKey::DisplayShortHashLen, _) => {
                return Err(MerkleError::configuration(
                    "display.short_hash_len must be a positive number",
                ));
            }
            (ConfigKey::DisplayStyle, ConfigValue::String(style)) => {
                self.display.style = style.parse()?;
            }
            (ConfigKey::OutputFormat, ConfigValue::String(format))
                if format == "json" || format == "text" =>
            {
                self.output.format = format;
            }
            (ConfigKey::OutputFormat, _) => {
                return Err(MerkleError::configuration(
                    "output.format must be one of: json, text",
                ));
            }
            (ConfigKey::OutputColor, ConfigValue::String(color))
                if matches!(color.as_str(), "auto" | "always" | "never") =>
            {
                self.output.color = color;
            }
            (ConfigKey::OutputColor, _) => {
                return Err(MerkleError::configuration(
                    "output.color must be one of: auto, always, never",
                ));
            }
            (key, _) => {
                return Err(MerkleError::configuration(format!(
                    "{} must be a string",
                    key.to_str()
                )));
            }
        }
        Ok(())
    }

    /// List all configuration values
    pub fn list(&self) -> Vec<(String, String)> {
        ConfigKey::ALL
            .iter()
            .map(|key| (key.to_str().to_string(), self.get(*key).to_string()))
            .collect()
    }

    /// Renderer options derived from the display section
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            short_hash_len: self.display.short_hash_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = GlobalConfig::default();

        assert_eq!(config.display.short_hash_len, 8);
        assert_eq!(config.display.style, TreeStyle::Folder);
        assert_eq!(config.output.format, "json");
        assert_eq!(config.output.color, "auto");
    }

    #[test]
    fn test_config_set_and_get() -> Result<()> {
        let mut config = GlobalConfig::default();

        config.set(ConfigKey::DisplayShortHashLen, ConfigValue::parse("12"))?;
        config.set(ConfigKey::DisplayStyle, ConfigValue::parse("levels"))?;
        config.set(ConfigKey::OutputFormat, ConfigValue::parse("text"))?;

        assert_eq!(
            config.get(ConfigKey::DisplayShortHashLen),
            ConfigValue::Number(12)
        );
        assert_eq!(config.display.style, TreeStyle::Levels);
        assert_eq!(config.render_options().short_hash_len, 12);
        assert_eq!(config.output.format, "text");

        Ok(())
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let mut config = GlobalConfig::default();

        assert!(config
            .set(ConfigKey::DisplayShortHashLen, ConfigValue::parse("0"))
            .is_err());
        assert!(config
            .set(ConfigKey::DisplayShortHashLen, ConfigValue::parse("wide"))
            .is_err());
        assert!(config
            .set(ConfigKey::OutputFormat, ConfigValue::parse("binary"))
            .is_err());
        assert!(config
            .set(ConfigKey::OutputColor, ConfigValue::parse("true"))
            .is_err());
        assert!(config
            .set(ConfigKey::DisplayStyle, ConfigValue::parse("diagram"))
            .is_err());
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn test_config_list() {
        let entries = GlobalConfig::default().list();

        assert_eq!(entries.len(), 4);
        assert!(entries
            .iter()
            .any(|(k, v)| k == "display.style" && v == "folder"));
        assert!(entries
            .iter()
            .any(|(k, v)| k == "display.short_hash_len" && v == "8"));
    }

    #[test]
    fn test_config_key_parsing() {
        assert_eq!(
            ConfigKey::from_str("display.style"),
            Some(ConfigKey::DisplayStyle)
        );
        assert_eq!(ConfigKey::from_str("user.name"), None);
        for key in ConfigKey::ALL {
            assert_eq!(ConfigKey::from_str(key.to_str()), Some(key));
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("config.toml");

        assert_eq!(GlobalConfig::load_from(&path)?, GlobalConfig::default());

        let mut config = GlobalConfig::default();
        config.set(ConfigKey::OutputColor, ConfigValue::parse("never"))?;
        config.save_to(&path)?;

        assert_eq!(GlobalConfig::load_from(&path)?, config);
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nshort_hash_len = 4\n")?;

        let config = GlobalConfig::load_from(&path)?;
        assert_eq!(config.display.short_hash_len, 4);
        assert_eq!(config.display.style, TreeStyle::Folder);
        assert_eq!(config.output, OutputConfig::default());
        Ok(())
    }

    #[test]
    fn test_invalid_file_is_configuration_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "display = [")?;

        let err = GlobalConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, MerkleError::ConfigurationError { .. }));
        Ok(())
    }
}
