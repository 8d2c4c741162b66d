//! Domain layer for mindreader
//!
//! This crate contains the core game logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns and
//! performs no I/O.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! An immutable, ordered set of characters, each a name plus string-valued
//! attributes. The union of attribute names is the catalog's *attribute
//! domain*.
//!
//! ## Narrowing
//!
//! A game keeps a candidate set (characters consistent with every answer so
//! far) and repeatedly asks about the attribute that splits it most evenly:
//!
//! - **Ternary** (default): answers are matched literally against stored values
//! - **TargetValue**: the player confirms or denies one anchor value

pub mod catalog;
pub mod config;
pub mod core;
pub mod game;
pub mod question;

// Re-export commonly used types
pub use catalog::{CandidateSet, Catalog, CatalogLoadError, Character, CharacterId, CharacterRecord};
pub use config::OutputFormat;
pub use core::{error::DomainError, player::PlayerId};
pub use game::{AnsweredQuestion, GameState, GiveUpReason, Session, Turn};
pub use question::{
    AnswerToken, Question, QuestionSelector, QuestionStrategy, apply_answer, balance_score,
    partition,
};
