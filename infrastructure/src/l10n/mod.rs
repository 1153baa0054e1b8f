//! Translation catalogs

mod catalog;

pub use catalog::{CatalogError, JsonMessageCatalog};
