//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod catalog;
mod engine;
mod logging;
mod output;
mod overrides;
mod repl;
mod transcript;

pub use catalog::FileCatalogConfig;
pub use engine::FileEngineConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use overrides::ConfigOverrides;
pub use repl::FileReplConfig;
pub use transcript::FileTranscriptConfig;

use mindreader_application::EngineConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("catalog.path cannot be empty")]
    EmptyCatalogPath,

    #[error("transcript.enabled is set but transcript.path is missing")]
    MissingTranscriptPath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Question strategy
    pub engine: FileEngineConfig,
    /// Character catalog location
    pub catalog: FileCatalogConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Game transcript settings
    pub transcript: FileTranscriptConfig,
    /// Diagnostic log settings
    pub logging: FileLoggingConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.catalog.path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyCatalogPath);
        }

        if self.transcript.enabled && self.transcript.path.is_none() {
            return Err(ConfigValidationError::MissingTranscriptPath);
        }

        Ok(())
    }

    pub fn to_engine_config(&self) -> EngineConfig {
        self.engine.to_engine_config()
    }
}
