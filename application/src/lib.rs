//! Application layer for mindreader
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::EngineConfig;
pub use ports::{
    catalog_source::CatalogSource,
    session_store::SessionStore,
    transcript_logger::{NoTranscript, TranscriptEvent, TranscriptLogger},
};
pub use use_cases::game_controller::{AnswerInput, GameController, GameError};
pub use use_cases::game_reply::{GameReply, QuestionPayload, TerminalKind, TerminalPayload};
