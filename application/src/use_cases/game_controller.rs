//! Game controller use case
//!
//! Drives one game per player: start, answer, abandon. The domain
//! [`Session`] does the narrowing; this use case keeps sessions in a
//! [`SessionStore`], reports every transition to the transcript and turns
//! domain outcomes into [`GameReply`] payloads.
//!
//! Transcript events are emitted from inside [`SessionStore::update`], so
//! for any one player the transcript follows the order in which the store
//! applied the transitions.

use super::game_reply::{GameReply, QuestionPayload};
use crate::config::EngineConfig;
use crate::ports::session_store::SessionStore;
use crate::ports::transcript_logger::{NoTranscript, TranscriptEvent, TranscriptLogger};
use mindreader_domain::{AnswerToken, Catalog, DomainError, PlayerId, Session, Turn};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while playing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No game in progress for player {0}")]
    SessionNotFound(PlayerId),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl GameError {
    pub fn is_session_not_found(&self) -> bool {
        matches!(self, GameError::SessionNotFound(_))
    }

    /// Check if the answer was rejected and the pending question still stands
    pub fn is_invalid_answer(&self) -> bool {
        matches!(self, GameError::Domain(e) if e.is_rejected_answer())
    }

    /// Check if the player can carry on (re-answer or start over)
    pub fn is_recoverable(&self) -> bool {
        self.is_session_not_found() || self.is_invalid_answer()
    }
}

/// Input for [`GameController::answer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerInput {
    pub player: PlayerId,
    /// Raw answer text, e.g. `yes`
    pub token: String,
    /// Attribute the player believes they are answering
    pub expected_attribute: Option<String>,
}

impl AnswerInput {
    pub fn new(player: impl Into<PlayerId>, token: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            token: token.into(),
            expected_attribute: None,
        }
    }

    pub fn expecting(mut self, attribute: impl Into<String>) -> Self {
        self.expected_attribute = Some(attribute.into());
        self
    }

    /// Parse button callback data of the form `attribute:token`.
    ///
    /// Data without a `:` is taken as a bare token.
    pub fn from_callback_data(player: impl Into<PlayerId>, data: &str) -> Self {
        match data.rsplit_once(':') {
            Some((attribute, token)) => Self::new(player, token).expecting(attribute),
            None => Self::new(player, data),
        }
    }
}

/// An answer the session accepted
struct AppliedAnswer {
    attribute: String,
    token: AnswerToken,
    remaining: usize,
    questions: usize,
    turn: Turn,
}

/// Validate and apply `input` to the session in `slot`.
///
/// Clears the slot when the game ends.
fn apply_answer_input(
    slot: &mut Option<Session>,
    catalog: &Catalog,
    input: &AnswerInput,
) -> Result<AppliedAnswer, GameError> {
    let Some(session) = slot.as_mut() else {
        return Err(GameError::SessionNotFound(input.player.clone()));
    };
    if let Some(expected) = &input.expected_attribute {
        session.check_attribute(expected)?;
    }
    let attribute = session.pending_question()?.attribute().to_string();
    let token = session.parse_answer(&input.token)?;
    let turn = session.answer(catalog, token)?;
    let applied = AppliedAnswer {
        attribute,
        token,
        remaining: session.candidates().len(),
        questions: session.history().len(),
        turn,
    };
    if applied.turn.is_terminal() {
        *slot = None;
    }
    Ok(applied)
}

/// Use case for playing games against one shared catalog
pub struct GameController<S: SessionStore + 'static> {
    catalog: Arc<Catalog>,
    store: Arc<S>,
    config: EngineConfig,
    transcript: Arc<dyn TranscriptLogger>,
}

impl<S: SessionStore + 'static> GameController<S> {
    pub fn new(catalog: Arc<Catalog>, store: Arc<S>, config: EngineConfig) -> Self {
        Self {
            catalog,
            store,
            config,
            transcript: Arc::new(NoTranscript),
        }
    }

    pub fn with_transcript(mut self, transcript: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = transcript;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start a new game, replacing any game the player already has
    pub async fn start(&self, player: &PlayerId) -> GameReply {
        let strategy = self.config.strategy;
        let (session, turn) = Session::start(player.clone(), &self.catalog, strategy);
        let candidates = self.catalog.len();

        info!(
            "Starting game for player {} with {} candidates ({})",
            player, candidates, strategy
        );

        let turn = self
            .store
            .update(player, move |slot: &mut Option<Session>| {
                // A game decided on the spot is never stored, but it still
                // replaces whatever the player had before.
                let replaced = if turn.is_terminal() {
                    slot.take()
                } else {
                    slot.replace(session)
                };
                if let Some(old) = replaced {
                    debug!("Replaced unfinished game for player {}", player);
                    self.transcript.log(abandoned(player, &old));
                }

                self.transcript.log(TranscriptEvent::GameStarted {
                    player: player.clone(),
                    strategy,
                    candidates,
                });
                self.report(player, &turn, 0);
                turn
            })
            .await;

        GameReply::from(turn)
    }

    /// Apply an answer to the player's pending question
    pub async fn answer(&self, input: AnswerInput) -> Result<GameReply, GameError> {
        let catalog = self.catalog.as_ref();
        let player = &input.player;

        self.store
            .update(player, |slot: &mut Option<Session>| {
                match apply_answer_input(slot, catalog, &input) {
                    Ok(applied) => {
                        debug!(
                            "Player {} answered {} to '{}'",
                            player, applied.token, applied.attribute
                        );
                        self.transcript.log(TranscriptEvent::AnswerReceived {
                            player: player.clone(),
                            attribute: applied.attribute,
                            answer: applied.token,
                            remaining: applied.remaining,
                        });
                        self.report(player, &applied.turn, applied.questions);
                        Ok(GameReply::from(applied.turn))
                    }
                    Err(e) => {
                        debug!("Rejected answer '{}' from player {}: {}", input.token, player, e);
                        self.transcript.log(TranscriptEvent::AnswerRejected {
                            player: player.clone(),
                            token: input.token.clone(),
                            expected_attribute: input.expected_attribute.clone(),
                            reason: e.to_string(),
                        });
                        Err(e)
                    }
                }
            })
            .await
    }

    /// Answer with raw text and no attribute check
    pub async fn submit_answer(&self, player: &PlayerId, raw: &str) -> Result<GameReply, GameError> {
        self.answer(AnswerInput::new(player.clone(), raw)).await
    }

    /// The pending question, for re-display after a rejected answer
    pub async fn current(&self, player: &PlayerId) -> Result<GameReply, GameError> {
        let session = self
            .store
            .get(player)
            .await
            .ok_or_else(|| GameError::SessionNotFound(player.clone()))?;
        let question = session.pending_question()?;
        Ok(GameReply::Question(QuestionPayload::from(question)))
    }

    /// Snapshot of the player's session, if a game is in progress
    pub async fn session(&self, player: &PlayerId) -> Option<Session> {
        self.store.get(player).await
    }

    /// Drop the player's game without an outcome.
    ///
    /// Returns whether a game was in progress.
    pub async fn abandon(&self, player: &PlayerId) -> bool {
        self.store
            .update(player, |slot: &mut Option<Session>| {
                let Some(session) = slot.take() else {
                    return false;
                };
                info!("Player {} abandoned their game", player);
                self.transcript.log(abandoned(player, &session));
                true
            })
            .await
    }

    /// Number of games in progress
    pub async fn active_sessions(&self) -> usize {
        self.store.len().await
    }

    fn report(&self, player: &PlayerId, turn: &Turn, questions: usize) {
        match turn {
            Turn::Ask(question) => {
                debug!("Asking player {} about '{}'", player, question.attribute());
            }
            Turn::Guessed { name } => {
                info!("Guessed '{}' for player {}", name, player);
            }
            Turn::GaveUp(reason) => {
                info!("Gave up for player {} ({})", player, reason);
            }
        }
        self.transcript
            .log(TranscriptEvent::for_turn(player, turn, questions));
    }
}

fn abandoned(player: &PlayerId, session: &Session) -> TranscriptEvent {
    TranscriptEvent::GameAbandoned {
        player: player.clone(),
        asked: session.asked().len(),
        candidates: session.candidates().len(),
    }
}
