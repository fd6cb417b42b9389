//! Config management use case

use crate::error::{MtagError, Result};
use crate::infrastructure::{Config, FileStoreRepository, StoreRepository};

/// Service for managing store configuration
pub struct ConfigService {
    repository: FileStoreRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileStoreRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "taggable_type" => Ok(config.taggable_type.clone()),
            "delimiter" => Ok(config.delimiter.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MtagError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: taggable_type, delimiter, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "delimiter" => {
                if value.is_empty() {
                    return Err(MtagError::Config(
                        "Delimiter must not be empty".to_string(),
                    ));
                }
                config.delimiter = value.to_string();
            }
            "taggable_type" => {
                // Existing taggings are already scoped to the current type
                return Err(MtagError::Config(
                    "Cannot modify 'taggable_type' after init (read-only)".to_string(),
                ));
            }
            "created" => {
                return Err(MtagError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MtagError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: delimiter",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
