//! Configuration module for tagpack
//!
//! Manages application configuration: where the tag index lives, which
//! collection it serves, where the remote store is mounted, and how large a
//! single export may grow. Configuration is stored in the user's config
//! directory.

use std::fs;
use std::path::PathBuf;

use byte_unit::Byte;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

mod setup;

pub use setup::first_time_setup;

/// Largest aggregate export size used when none is configured
pub const DEFAULT_MAX_EXPORT_SIZE: &str = "100 MiB";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TagpackConfig {
    /// Filesystem path of the tag index database
    pub index_path: PathBuf,

    /// Collection the index trees are namespaced under
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Root directory the remote store is mounted at
    pub store_root: PathBuf,

    /// Maximum aggregate size of one export, as a human-readable byte string
    #[serde(default = "default_max_export_size")]
    pub max_export_size: String,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

fn default_collection() -> String {
    "tags".to_string()
}

fn default_max_export_size() -> String {
    DEFAULT_MAX_EXPORT_SIZE.to_string()
}

impl Default for TagpackConfig {
    fn default() -> Self {
        Self {
            index_path: PathBuf::new(),
            collection: default_collection(),
            store_root: PathBuf::new(),
            max_export_size: default_max_export_size(),
            quiet: false,
        }
    }
}

impl TagpackConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        let tagpack_config_dir = config_dir.join("tagpack");
        Ok(tagpack_config_dir.join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }

    /// The configured export ceiling in bytes
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configured string is not a valid byte
    /// size.
    pub fn max_export_size_bytes(&self) -> Result<u64, ConfigError> {
        let byte = Byte::parse_str(&self.max_export_size, true).map_err(|e| {
            ConfigError::Message(format!(
                "Invalid max_export_size '{}': {e}",
                self.max_export_size
            ))
        })?;
        Ok(byte.as_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TagpackConfig::default();
        assert_eq!(config.collection, "tags");
        assert_eq!(config.max_export_size, DEFAULT_MAX_EXPORT_SIZE);
        assert!(!config.quiet);
    }

    #[test]
    fn test_max_export_size_parses_binary_units() {
        let config = TagpackConfig {
            max_export_size: "1 KiB".to_string(),
            ..Default::default()
        };
        assert_eq!(config.max_export_size_bytes().unwrap(), 1024);
    }

    #[test]
    fn test_max_export_size_parses_plain_bytes() {
        let config = TagpackConfig {
            max_export_size: "25".to_string(),
            ..Default::default()
        };
        assert_eq!(config.max_export_size_bytes().unwrap(), 25);
    }

    #[test]
    fn test_invalid_max_export_size_is_rejected() {
        let config = TagpackConfig {
            max_export_size: "lots".to_string(),
            ..Default::default()
        };
        assert!(config.max_export_size_bytes().is_err());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = TagpackConfig {
            index_path: PathBuf::from("/data/tagpack/index"),
            collection: "archive".to_string(),
            store_root: PathBuf::from("/mnt/remote"),
            max_export_size: "2 GiB".to_string(),
            quiet: true,
        };

        let toml_string = toml::to_string_pretty(&config).unwrap();
        let parsed: TagpackConfig = toml::from_str(&toml_string).unwrap();

        assert_eq!(parsed.index_path, config.index_path);
        assert_eq!(parsed.collection, "archive");
        assert_eq!(parsed.max_export_size, "2 GiB");
        assert!(parsed.quiet);
    }
}
