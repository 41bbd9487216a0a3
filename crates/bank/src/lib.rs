#![forbid(unsafe_code)]

mod builtin;
mod catalog;

pub use builtin::builtin_catalog;
pub use catalog::{Catalog, CatalogError};
