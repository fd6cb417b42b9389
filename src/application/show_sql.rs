//! Show compiled SQL use case

use crate::domain::tags::{build_query_spec, FinderOptions, SqlCompiler, SqlNaming, TagList};
use crate::error::Result;
use crate::infrastructure::{FileStoreRepository, StoreRepository};

/// Table the compiled SQL selects records from
const RECORDS_TABLE: &str = "records";

/// Service for rendering the SQL a query would execute against a
/// relational backend
pub struct ShowSqlService {
    repository: FileStoreRepository,
}

impl ShowSqlService {
    /// Create a new show SQL service
    pub fn new(repository: FileStoreRepository) -> Self {
        ShowSqlService { repository }
    }

    /// Compile the query for a tag list and finder flags.
    ///
    /// Returns `None` when the tag list is empty: no query is built, and
    /// no SQL exists to show.
    pub fn execute(&self, tags: &str, options: &FinderOptions) -> Result<Option<String>> {
        let config = self.repository.load_config()?;
        let list = TagList::parse(tags, &config.delimiter);

        let spec = match build_query_spec(&list, options) {
            Some(spec) => spec,
            None => return Ok(None),
        };

        let compiler =
            SqlCompiler::new(SqlNaming::for_type(RECORDS_TABLE, &config.taggable_type));
        Ok(Some(compiler.compile(&spec)))
    }
}
