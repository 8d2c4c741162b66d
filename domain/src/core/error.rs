//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while playing a game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid answer '{token}': expected one of {expected}")]
    InvalidAnswer { token: String, expected: String },

    #[error("Stale answer for '{answered}': the current question is about '{current}'")]
    StaleAnswer { answered: String, current: String },

    #[error("No question is pending")]
    NoPendingQuestion,

    #[error("The game is already over")]
    GameOver,
}

impl DomainError {
    /// Check if this error rejected an answer without touching the game state
    ///
    /// The pending question is still valid and may be shown again.
    pub fn is_rejected_answer(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidAnswer { .. } | DomainError::StaleAnswer { .. }
        )
    }
}
