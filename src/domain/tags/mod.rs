//! Tag system

pub mod compiler;
pub mod model;
pub mod parser;
pub mod query;

// Re-export main types
pub use compiler::{SqlCompiler, SqlNaming};
pub use model::{Tag, Tagging};
pub use parser::{MachineTagPattern, TagList};
pub use query::{build_query_spec, FinderOptions, QuerySpec, TagField, TagPredicate};
