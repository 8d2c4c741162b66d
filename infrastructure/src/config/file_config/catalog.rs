//! Catalog configuration from TOML (`[catalog]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Path to the characters JSON file
    pub path: PathBuf,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("characters.json"),
        }
    }
}
