//! Infrastructure layer for mindreader
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod session;

// Re-export commonly used types
pub use catalog::JsonFileCatalogSource;
pub use config::{
    ConfigLoader, ConfigOverrides, ConfigValidationError, FileCatalogConfig, FileConfig, FileEngineConfig,
    FileLoggingConfig, FileOutputConfig, FileReplConfig, FileTranscriptConfig,
};
pub use logging::JsonlTranscriptLogger;
pub use session::InMemorySessionStore;
