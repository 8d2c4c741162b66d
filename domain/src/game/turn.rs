//! Game state and turn outcomes

use crate::question::Question;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// Created, first evaluation not yet run
    #[default]
    Init,
    /// A question is pending
    Asking,
    /// A unique candidate was announced
    Guessed,
    /// The engine conceded
    GaveUp,
}

impl GameState {
    pub fn as_str(&self) -> &str {
        match self {
            GameState::Init => "init",
            GameState::Asking => "asking",
            GameState::Guessed => "guessed",
            GameState::GaveUp => "gave_up",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::Guessed | GameState::GaveUp)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why the engine conceded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GiveUpReason {
    /// Every candidate was eliminated
    NoCandidates,
    /// Candidates remain but no unasked attribute tells them apart
    NoDiscriminatingQuestion,
}

impl GiveUpReason {
    pub fn as_str(&self) -> &str {
        match self {
            GiveUpReason::NoCandidates => "no_candidates",
            GiveUpReason::NoDiscriminatingQuestion => "no_discriminating_question",
        }
    }
}

impl std::fmt::Display for GiveUpReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one evaluation of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Ask the player this question and wait for an answer
    Ask(Question),
    /// Announce the only remaining candidate
    Guessed { name: String },
    /// Concede
    GaveUp(GiveUpReason),
}

impl Turn {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Turn::Ask(_))
    }

    pub fn question(&self) -> Option<&Question> {
        match self {
            Turn::Ask(question) => Some(question),
            _ => None,
        }
    }

    /// The session state this outcome leaves behind
    pub fn state(&self) -> GameState {
        match self {
            Turn::Ask(_) => GameState::Asking,
            Turn::Guessed { .. } => GameState::Guessed,
            Turn::GaveUp(_) => GameState::GaveUp,
        }
    }
}
