//! Exercise catalog loading.

mod json_file;

pub use json_file::{load_catalog, CatalogError};
