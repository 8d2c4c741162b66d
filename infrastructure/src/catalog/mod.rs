//! Catalog sources: where the character catalog is read from.

mod json_file;

pub use json_file::JsonFileCatalogSource;
