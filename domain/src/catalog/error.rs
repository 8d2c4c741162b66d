//! Catalog loading errors

use thiserror::Error;

/// Errors raised while loading the character catalog
///
/// All of these are fatal to process readiness: no game can start
/// without a valid catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogLoadError {
    #[error("Character catalog not found at {location}")]
    Missing { location: String },

    #[error("Character catalog at {location} could not be read: {reason}")]
    Unreadable { location: String, reason: String },

    #[error("Character catalog is malformed: {0}")]
    Malformed(String),

    #[error("Character #{index} has an empty name")]
    EmptyName { index: usize },
}

impl CatalogLoadError {
    /// Check if the source itself was absent (as opposed to present but broken)
    pub fn is_missing(&self) -> bool {
        matches!(self, CatalogLoadError::Missing { .. })
    }
}
