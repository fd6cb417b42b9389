//! Domain layer - Tag matching and query construction

pub mod tags;

pub use tags::{build_query_spec, FinderOptions, QuerySpec, TagList};
