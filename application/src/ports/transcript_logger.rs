//! Game transcript port
//!
//! A transcript is the machine-readable history of every game: one
//! [`TranscriptEvent`] per transition, in the order the session store
//! applied them. Diagnostics go through `tracing` instead.

use mindreader_domain::{AnswerToken, GameState, GiveUpReason, PlayerId, QuestionStrategy, Turn};
use serde::Serialize;

/// One game transition.
///
/// Serializes with a snake_case `type` tag, e.g.
/// `{"type":"answer_received","player":"42","attribute":"is_wizard","answer":"no","remaining":2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TranscriptEvent {
    GameStarted {
        player: PlayerId,
        strategy: QuestionStrategy,
        candidates: usize,
    },
    QuestionAsked {
        player: PlayerId,
        attribute: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        anchor: Option<String>,
    },
    AnswerReceived {
        player: PlayerId,
        attribute: String,
        answer: AnswerToken,
        /// Candidates left after narrowing
        remaining: usize,
    },
    AnswerRejected {
        player: PlayerId,
        token: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        expected_attribute: Option<String>,
        reason: String,
    },
    GameFinished {
        player: PlayerId,
        /// `guessed` or `gave_up`
        outcome: GameState,
        #[serde(skip_serializing_if = "Option::is_none")]
        character_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<GiveUpReason>,
        questions: usize,
    },
    GameAbandoned {
        player: PlayerId,
        asked: usize,
        candidates: usize,
    },
}

impl TranscriptEvent {
    /// The event a turn produces: a question or the final outcome
    pub fn for_turn(player: &PlayerId, turn: &Turn, questions: usize) -> Self {
        match turn {
            Turn::Ask(question) => TranscriptEvent::QuestionAsked {
                player: player.clone(),
                attribute: question.attribute().to_string(),
                anchor: question.anchor().map(str::to_string),
            },
            Turn::Guessed { name } => TranscriptEvent::GameFinished {
                player: player.clone(),
                outcome: turn.state(),
                character_name: Some(name.clone()),
                reason: None,
                questions,
            },
            Turn::GaveUp(reason) => TranscriptEvent::GameFinished {
                player: player.clone(),
                outcome: turn.state(),
                character_name: None,
                reason: Some(*reason),
                questions,
            },
        }
    }

    /// The `type` tag this event is written with
    pub fn kind(&self) -> &'static str {
        match self {
            TranscriptEvent::GameStarted { .. } => "game_started",
            TranscriptEvent::QuestionAsked { .. } => "question_asked",
            TranscriptEvent::AnswerReceived { .. } => "answer_received",
            TranscriptEvent::AnswerRejected { .. } => "answer_rejected",
            TranscriptEvent::GameFinished { .. } => "game_finished",
            TranscriptEvent::GameAbandoned { .. } => "game_abandoned",
        }
    }

    pub fn player(&self) -> &PlayerId {
        match self {
            TranscriptEvent::GameStarted { player, .. }
            | TranscriptEvent::QuestionAsked { player, .. }
            | TranscriptEvent::AnswerReceived { player, .. }
            | TranscriptEvent::AnswerRejected { player, .. }
            | TranscriptEvent::GameFinished { player, .. }
            | TranscriptEvent::GameAbandoned { player, .. } => player,
        }
    }
}

/// Sink for [`TranscriptEvent`]s.
///
/// `log` is called while the player's session is locked, so events for one
/// player arrive in the order their transitions happened. It must not fail
/// the game: adapters swallow write errors.
pub trait TranscriptLogger: Send + Sync {
    fn log(&self, event: TranscriptEvent);
}

/// Discards every event
pub struct NoTranscript;

impl TranscriptLogger for NoTranscript {
    fn log(&self, _event: TranscriptEvent) {}
}
