//! Engine configuration: how the game controller plays.

use mindreader_domain::QuestionStrategy;
use serde::{Deserialize, Serialize};

/// Game engine parameters.
///
/// Fixed for the lifetime of a [`GameController`](crate::use_cases::game_controller::GameController);
/// every session it starts uses the same strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How questions are formulated and answers applied.
    pub strategy: QuestionStrategy,
}

impl EngineConfig {
    pub fn with_strategy(mut self, strategy: QuestionStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
