//! Configuration file loading for mindreader
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MINDREADER_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./mindreader.toml` or `./.mindreader.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/mindreader/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top through [`FileConfig::apply_overrides`].

mod file_config;
mod loader;

pub use file_config::{
    ConfigOverrides, ConfigValidationError, FileCatalogConfig, FileConfig, FileEngineConfig, FileLoggingConfig,
    FileOutputConfig, FileReplConfig, FileTranscriptConfig,
};
pub use loader::ConfigLoader;
