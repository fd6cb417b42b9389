//! Configuration management

use crate::error::{MtagError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_TAGGABLE_TYPE: &str = "Record";
pub const DEFAULT_DELIMITER: &str = ",";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Type scope recorded on every tagging and used in compiled SQL
    pub taggable_type: String,
    /// Separator for tag list strings
    pub delimiter: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config
    pub fn new(taggable_type: &str, delimiter: &str) -> Self {
        Config {
            taggable_type: taggable_type.to_string(),
            delimiter: delimiter.to_string(),
            created: Utc::now(),
        }
    }

    /// Load config from .mtag/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".mtag").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MtagError::NotStoreDirectory(path.to_path_buf())
            } else {
                MtagError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MtagError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .mtag/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let mtag_dir = path.join(".mtag");
        let config_path = mtag_dir.join("config.toml");

        // Ensure .mtag directory exists
        if !mtag_dir.exists() {
            fs::create_dir(&mtag_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MtagError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_TAGGABLE_TYPE, DEFAULT_DELIMITER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new("Bookmark", ";");
        assert_eq!(config.taggable_type, "Bookmark");
        assert_eq!(config.delimiter, ";");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.taggable_type, "Record");
        assert_eq!(config.delimiter, ",");
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new("Bookmark", ",");

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".mtag").exists());
        assert!(temp.path().join(".mtag/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();

        assert_eq!(loaded.taggable_type, config.taggable_type);
        assert_eq!(loaded.delimiter, config.delimiter);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            MtagError::NotStoreDirectory(_) => {}
            _ => panic!("Expected NotStoreDirectory error"),
        }
    }
}
