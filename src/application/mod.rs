//! Application layer: record files and use cases
//!
//! This layer loads flat records and hands them to the domain forest.

pub mod catalog;
pub mod error;
pub mod error_ext;

pub use catalog::{load_categories, parse_categories, Catalog, Category};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
