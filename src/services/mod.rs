// Service exports
pub mod catalog;

pub use catalog::{load_catalog, parse_catalog, validate_catalog, CatalogError};
