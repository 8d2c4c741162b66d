//! Application-level configuration.
//!
//! - [`EngineConfig`] - question strategy used by the game controller

pub mod engine_config;

pub use engine_config::EngineConfig;
