//! Configuration module for tagmeta
//!
//! Holds output defaults and custom drive definitions. Configuration is
//! stored in the user's config directory and is only written by
//! `tagmeta config set`.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Path display format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PathFormat {
    /// Display absolute paths
    #[default]
    Absolute,
    /// Display paths relative to the current directory
    Relative,
}

/// How result objects are written to stdout
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
    /// Comma-separated values with a header row
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Csv => "csv",
        };
        f.write_str(name)
    }
}

const KEYS: &str = "quiet, verbose, path_format, output_format, drive.<name>";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct TagmetaConfig {
    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Emit verbose traces by default
    #[serde(default)]
    pub verbose: bool,

    /// Default format for displaying paths (absolute or relative)
    #[serde(default)]
    pub path_format: PathFormat,

    /// Default format for result objects
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Custom filesystem drives, name to root directory
    #[serde(default)]
    pub drives: BTreeMap<String, PathBuf>,
}

impl TagmetaConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("tagmeta").join("config.toml"))
    }

    /// Load configuration from `path`; a missing file yields defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`, creating its directory if needed
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Update one setting from its textual form
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown keys or values that do not parse.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "quiet" => self.quiet = parse_bool(key, value)?,
            "verbose" => self.verbose = parse_bool(key, value)?,
            "path_format" => {
                self.path_format = match value.to_ascii_lowercase().as_str() {
                    "absolute" => PathFormat::Absolute,
                    "relative" => PathFormat::Relative,
                    _ => {
                        return Err(ConfigError::Message(format!(
                            "Invalid value for path_format: '{value}'. Use 'absolute' or 'relative'"
                        )));
                    }
                };
            }
            "output_format" => {
                self.output_format = OutputFormat::from_str(value, true).map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for output_format: '{value}'. Use 'text', 'json' or 'csv'"
                    ))
                })?;
            }
            _ => {
                let Some(name) = drive_key(key) else {
                    return Err(unknown_key(key));
                };
                if value.is_empty() {
                    self.drives.remove(name);
                } else {
                    self.drives.insert(name.to_string(), PathBuf::from(value));
                }
            }
        }
        Ok(())
    }

    /// Current value of one setting in its textual form
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown keys or undefined drives.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "quiet" => self.quiet.to_string(),
            "verbose" => self.verbose.to_string(),
            "path_format" => match self.path_format {
                PathFormat::Absolute => "absolute".to_string(),
                PathFormat::Relative => "relative".to_string(),
            },
            "output_format" => self.output_format.to_string(),
            _ => {
                let name = drive_key(key).ok_or_else(|| unknown_key(key))?;
                self.drives
                    .get(name)
                    .map(|p| p.display().to_string())
                    .ok_or_else(|| ConfigError::Message(format!("Drive '{name}' is not defined")))?
            }
        };
        Ok(value)
    }
}

fn drive_key(key: &str) -> Option<&str> {
    key.strip_prefix("drive.").filter(|name| !name.is_empty())
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key: '{key}'. Available keys: {KEYS}"
    ))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    value.parse::<bool>().map_err(|_| {
        ConfigError::Message(format!(
            "Invalid value for {key}: '{value}'. Use 'true' or 'false'"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TagmetaConfig::default();
        assert!(!config.quiet);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.path_format, PathFormat::Absolute);
        assert!(config.drives.is_empty());
    }

    #[test]
    fn test_missing_file_gives_defaults_without_creating_it() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tagmeta").join("config.toml");
        let config = TagmetaConfig::load_from(&path).unwrap();
        assert_eq!(config, TagmetaConfig::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tagmeta").join("config.toml");
        let mut config = TagmetaConfig::default();
        config.set_value("output_format", "JSON").unwrap();
        config.set_value("path_format", "relative").unwrap();
        config.set_value("drive.Photos", "/srv/photos").unwrap();
        config.save_to(&path).unwrap();

        let reloaded = TagmetaConfig::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
        assert_eq!(reloaded.get_value("drive.Photos").unwrap(), "/srv/photos");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "verbose = true\n").unwrap();
        let config = TagmetaConfig::load_from(&path).unwrap();
        assert!(config.verbose);
        assert!(!config.quiet);
    }

    #[test]
    fn test_set_and_get_values() {
        let mut config = TagmetaConfig::default();
        config.set_value("quiet", "true").unwrap();
        assert_eq!(config.get_value("quiet").unwrap(), "true");
        assert_eq!(config.get_value("output_format").unwrap(), "text");

        config.set_value("drive.Work", "/tmp/work").unwrap();
        config.set_value("drive.Work", "").unwrap();
        assert!(config.get_value("drive.Work").is_err());
    }

    #[test]
    fn test_invalid_keys_and_values() {
        let mut config = TagmetaConfig::default();
        assert!(config.set_value("quiet", "maybe").is_err());
        assert!(config.set_value("path_format", "sideways").is_err());
        assert!(config.set_value("database", "x").is_err());
        assert!(config.set_value("drive.", "/x").is_err());
        assert!(config.get_value("colour").is_err());
    }
}
