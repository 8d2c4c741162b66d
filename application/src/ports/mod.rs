//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod catalog_source;
pub mod session_store;
pub mod transcript_logger;
