//! Transcript configuration from TOML (`[transcript]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw game transcript configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTranscriptConfig {
    /// Write a JSONL transcript of every game event
    pub enabled: bool,
    /// Transcript file path
    pub path: Option<PathBuf>,
}

impl FileTranscriptConfig {
    /// The transcript path, if the transcript is switched on
    pub fn active_path(&self) -> Option<&PathBuf> {
        if self.enabled { self.path.as_ref() } else { None }
    }
}
