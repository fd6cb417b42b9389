//! Initialize store use case

use crate::error::Result;
use crate::infrastructure::{Config, FileStoreRepository, StoreRepository, TagStore};
use std::fs;
use std::path::Path;

/// Service for initializing a new tag store
pub struct InitService;

impl InitService {
    /// Initialize a new tag store at the specified path.
    pub fn execute(path: &Path, taggable_type: &str, delimiter: &str) -> Result<()> {
        // Create the directory if it doesn't exist
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileStoreRepository::new(path.to_path_buf());

        // Initialize .mtag directory
        repo.initialize()?;

        // Create default config and an empty store document
        let config = Config::new(taggable_type, delimiter);
        repo.save_config(&config)?;
        repo.save_store(&TagStore::new(taggable_type))?;

        println!("Initialized mtag store at {}", path.display());
        println!("Taggable type: {}", taggable_type);

        Ok(())
    }
}
