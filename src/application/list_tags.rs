//! List tags use case

use crate::error::Result;
use crate::infrastructure::{FileStoreRepository, StoreRepository};

/// Service for listing all tags in the store.
pub struct ListTagsService {
    repository: FileStoreRepository,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(repository: FileStoreRepository) -> Self {
        Self { repository }
    }

    /// Execute tag listing: distinct tag names, sorted.
    pub fn execute(&self) -> Result<Vec<String>> {
        let store = self.repository.load_store()?;
        Ok(store.tag_names())
    }
}
