//! mtag - Machine-tag record finder
//!
//! Finds records tagged with plain labels or machine tags
//! (`namespace:predicate=value`), where any machine tag component may be
//! wildcarded to match by partial key.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MtagError;
