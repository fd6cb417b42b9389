//! Tag a record use case

use crate::domain::tags::TagList;
use crate::error::Result;
use crate::infrastructure::{FileStoreRepository, StoreRepository};

/// Service for creating and re-tagging records
pub struct TagRecordService {
    repository: FileStoreRepository,
}

impl TagRecordService {
    /// Create a new tag record service
    pub fn new(repository: FileStoreRepository) -> Self {
        TagRecordService { repository }
    }

    /// Upsert a record by name, set its attributes, and replace its tag
    /// list. Returns the number of tags now applied to the record.
    pub fn execute(
        &self,
        name: &str,
        tag_list: &str,
        attributes: &[(String, String)],
    ) -> Result<usize> {
        let config = self.repository.load_config()?;
        let mut store = self.repository.load_store()?;

        let record_id = store.find_or_create_record(name);
        for (key, value) in attributes {
            store.set_attribute(record_id, key, value)?;
        }

        let tags = TagList::parse(tag_list, &config.delimiter);
        store.set_tag_list(record_id, &tags)?;
        let applied = store.tag_list(record_id).len();

        self.repository.save_store(&store)?;
        Ok(applied)
    }
}
