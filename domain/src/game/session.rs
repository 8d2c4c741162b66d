//! Game session entity

use super::turn::{GameState, GiveUpReason, Turn};
use crate::catalog::{CandidateSet, Catalog};
use crate::core::error::DomainError;
use crate::core::player::PlayerId;
use crate::question::{AnswerToken, Question, QuestionSelector, QuestionStrategy, apply_answer};
use std::collections::BTreeSet;

/// A question the player has answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredQuestion {
    pub question: Question,
    pub answer: AnswerToken,
}

/// One player's game (Entity)
///
/// Holds the candidates still in play, the attributes already asked and the
/// pending question. The catalog is passed in on every call rather than
/// owned, so many sessions share one read-only catalog.
///
/// # Lifecycle
///
/// `Init` → [`begin`](Self::begin) → `Asking` ⇄ [`answer`](Self::answer) →
/// `Guessed` | `GaveUp`
///
/// Candidates only ever shrink and `asked` only ever grows.
#[derive(Debug, Clone)]
pub struct Session {
    player: PlayerId,
    selector: QuestionSelector,
    candidates: CandidateSet,
    asked: BTreeSet<String>,
    current_question: Option<Question>,
    state: GameState,
    history: Vec<AnsweredQuestion>,
}

impl Session {
    /// A fresh session over the whole catalog, in the `Init` state
    pub fn new(player: PlayerId, catalog: &Catalog, strategy: QuestionStrategy) -> Self {
        Self {
            player,
            selector: QuestionSelector::new(strategy),
            candidates: CandidateSet::all(catalog),
            asked: BTreeSet::new(),
            current_question: None,
            state: GameState::Init,
            history: Vec::new(),
        }
    }

    /// Create a session and run its first evaluation
    pub fn start(player: PlayerId, catalog: &Catalog, strategy: QuestionStrategy) -> (Self, Turn) {
        let mut session = Self::new(player, catalog, strategy);
        let turn = session.begin(catalog);
        (session, turn)
    }

    /// Run the first evaluation of an `Init` session.
    ///
    /// On any other state the current outcome is reported again without
    /// re-evaluating.
    pub fn begin(&mut self, catalog: &Catalog) -> Turn {
        if self.state != GameState::Init {
            if let Some(question) = &self.current_question {
                return Turn::Ask(question.clone());
            }
            return self.terminal_turn(catalog);
        }
        self.evaluate(catalog)
    }

    /// Apply an answer to the pending question and evaluate again.
    ///
    /// Rejected answers leave the session untouched.
    pub fn answer(&mut self, catalog: &Catalog, token: AnswerToken) -> Result<Turn, DomainError> {
        let question = self.pending_question()?;
        if !question.accepts(token) {
            return Err(DomainError::InvalidAnswer {
                token: token.to_string(),
                expected: question.options_text(),
            });
        }

        let narrowed = apply_answer(catalog, &self.candidates, question, token);
        self.candidates = narrowed;
        if let Some(question) = self.current_question.take() {
            self.history.push(AnsweredQuestion {
                question,
                answer: token,
            });
        }
        Ok(self.evaluate(catalog))
    }

    /// Parse raw player text against the pending question's options
    pub fn parse_answer(&self, raw: &str) -> Result<AnswerToken, DomainError> {
        self.pending_question()?.parse_answer(raw)
    }

    /// Reject answers addressed to a question other than the pending one
    pub fn check_attribute(&self, attribute: &str) -> Result<(), DomainError> {
        let question = self.pending_question()?;
        if question.attribute() != attribute {
            return Err(DomainError::StaleAnswer {
                answered: attribute.to_string(),
                current: question.attribute().to_string(),
            });
        }
        Ok(())
    }

    /// The question awaiting an answer
    pub fn pending_question(&self) -> Result<&Question, DomainError> {
        if self.state.is_terminal() {
            return Err(DomainError::GameOver);
        }
        self.current_question
            .as_ref()
            .ok_or(DomainError::NoPendingQuestion)
    }

    /// Terminal check / ask cycle, in strict priority order
    fn evaluate(&mut self, catalog: &Catalog) -> Turn {
        let turn = if self.candidates.is_empty() {
            Turn::GaveUp(GiveUpReason::NoCandidates)
        } else if self.candidates.single().is_some() {
            self.terminal_turn(catalog)
        } else {
            match self
                .selector
                .select_next(catalog, &self.candidates, &self.asked)
            {
                Some(question) => {
                    self.asked.insert(question.attribute().to_string());
                    self.current_question = Some(question.clone());
                    Turn::Ask(question)
                }
                None => Turn::GaveUp(GiveUpReason::NoDiscriminatingQuestion),
            }
        };

        if turn.is_terminal() {
            self.current_question = None;
        }
        self.state = turn.state();
        turn
    }

    /// The terminal outcome implied by the current candidates
    fn terminal_turn(&self, catalog: &Catalog) -> Turn {
        match self.candidates.single().and_then(|id| catalog.get(id)) {
            Some(character) => Turn::Guessed {
                name: character.name().to_string(),
            },
            None if self.candidates.is_empty() => Turn::GaveUp(GiveUpReason::NoCandidates),
            None => Turn::GaveUp(GiveUpReason::NoDiscriminatingQuestion),
        }
    }

    pub fn player(&self) -> &PlayerId {
        &self.player
    }

    pub fn strategy(&self) -> QuestionStrategy {
        self.selector.strategy()
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn asked(&self) -> &BTreeSet<String> {
        &self.asked
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn history(&self) -> &[AnsweredQuestion] {
        &self.history
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }
}
