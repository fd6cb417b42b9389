//! File system repository

use crate::error::{MtagError, Result};
use crate::infrastructure::{Config, TagStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for store operations
pub trait StoreRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .mtag/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .mtag/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Load the store document from .mtag/store.toml
    fn load_store(&self) -> Result<TagStore>;

    /// Save the store document to .mtag/store.toml
    fn save_store(&self, store: &TagStore) -> Result<()>;

    /// Check if .mtag directory exists
    fn is_initialized(&self) -> bool;

    /// Create .mtag directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of StoreRepository
#[derive(Debug, Clone)]
pub struct FileStoreRepository {
    pub root: PathBuf,
}

impl FileStoreRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileStoreRepository { root }
    }

    /// Discover store root by walking up from current directory
    /// First checks MTAG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check MTAG_ROOT environment variable first
        if let Ok(root_path) = std::env::var("MTAG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_mtag_dir(&path) {
                return Ok(FileStoreRepository::new(path));
            } else {
                return Err(MtagError::Config(format!(
                    "MTAG_ROOT is set to '{}' but no .mtag directory found. \
                    Run 'mtag init' in that directory or unset MTAG_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover store root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_mtag_dir(&current) {
                return Ok(FileStoreRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .mtag
                    return Err(MtagError::NotStoreDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .mtag directory
    fn has_mtag_dir(path: &Path) -> bool {
        path.join(".mtag").is_dir()
    }

    fn store_path(&self) -> PathBuf {
        self.root.join(".mtag").join("store.toml")
    }
}

impl StoreRepository for FileStoreRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn load_store(&self) -> Result<TagStore> {
        let contents = fs::read_to_string(self.store_path()).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MtagError::NotStoreDirectory(self.root.clone())
            } else {
                MtagError::Io(e)
            }
        })?;

        let store = toml::from_str(&contents)?;
        Ok(store)
    }

    fn save_store(&self, store: &TagStore) -> Result<()> {
        let contents = toml::to_string_pretty(store)?;
        fs::write(self.store_path(), contents)?;
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        Self::has_mtag_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let mtag_dir = self.root.join(".mtag");

        if mtag_dir.exists() {
            return Err(MtagError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&mtag_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn initialized_repo(temp: &TempDir) -> FileStoreRepository {
        let repo = FileStoreRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo
    }

    #[test]
    fn test_initialize_creates_mtag_dir() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);

        assert!(repo.is_initialized());
        assert!(temp.path().join(".mtag").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);

        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_save_and_load_store() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);

        let mut store = TagStore::new("Record");
        let id = store.find_or_create_record("ruby");
        store
            .set_tag_list(id, &crate::domain::tags::TagList::parse("red, clear", ","))
            .unwrap();
        repo.save_store(&store).unwrap();

        let loaded = repo.load_store().unwrap();
        assert_eq!(loaded.taggable_type, "Record");
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.tag_list(id), vec!["red", "clear"]);
    }

    #[test]
    fn test_load_store_missing() {
        let temp = TempDir::new().unwrap();
        let repo = FileStoreRepository::new(temp.path().to_path_buf());

        match repo.load_store() {
            Err(MtagError::NotStoreDirectory(_)) => {}
            other => panic!("Expected NotStoreDirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_from_nested_directory() {
        let temp = TempDir::new().unwrap();
        initialized_repo(&temp);

        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = FileStoreRepository::discover_from(&nested).unwrap();
        assert_eq!(found.root(), temp.path());
    }

    #[test]
    fn test_discover_from_fails_without_store() {
        let temp = TempDir::new().unwrap();
        let result = FileStoreRepository::discover_from(temp.path());
        assert!(matches!(result, Err(MtagError::NotStoreDirectory(_))));
    }
}
