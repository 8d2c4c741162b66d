//! Catalog source port
//!
//! Defines where the character catalog comes from. The catalog is loaded
//! once at startup, so this port is synchronous.

use mindreader_domain::{Catalog, CatalogLoadError};

/// Supplies the character catalog
pub trait CatalogSource: Send + Sync {
    /// Load and validate the catalog
    fn load(&self) -> Result<Catalog, CatalogLoadError>;

    /// Human-readable description of where the catalog comes from
    fn describe(&self) -> String;
}
