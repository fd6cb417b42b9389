//! Find tagged records use case

use crate::domain::tags::{build_query_spec, FinderOptions, TagList};
use crate::error::Result;
use crate::infrastructure::{FileStoreRepository, Record, StoreRepository};

/// Service for finding records tagged with a tag list
pub struct FindRecordsService {
    repository: FileStoreRepository,
}

impl FindRecordsService {
    /// Create a new find records service
    pub fn new(repository: FileStoreRepository) -> Self {
        FindRecordsService { repository }
    }

    /// Execute a tagged-with query.
    ///
    /// The tag list string is split with the configured delimiter; each
    /// token may be a wildcard machine tag. An empty tag list yields an
    /// empty result set without consulting the store.
    pub fn execute(&self, tags: &str, options: &FinderOptions) -> Result<Vec<Record>> {
        let config = self.repository.load_config()?;
        let list = TagList::parse(tags, &config.delimiter);

        let spec = match build_query_spec(&list, options) {
            Some(spec) => spec,
            None => return Ok(Vec::new()),
        };

        let store = self.repository.load_store()?;
        let records = store.execute(&spec)?.into_iter().cloned().collect();
        Ok(records)
    }
}
