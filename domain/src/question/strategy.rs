//! Question formulation strategies.
//!
//! Defines [`QuestionStrategy`], which decides how a selected attribute is
//! put to the player and how the answer narrows the candidates:
//! - Ternary: the player answers with the literal stored value
//! - TargetValue: the player confirms or denies one concrete anchor value
//!
//! The two are not reconciled into one rule; configuration picks one per
//! engine instance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How questions are formulated and answers applied.
///
/// # Ternary vs TargetValue
///
/// - **Ternary** (default): options are `yes`, `no`, `maybe`, and each
///   option keeps exactly the characters whose stored value is that word.
///
/// - **TargetValue**: the question carries an anchor value. `yes` keeps
///   characters holding the anchor, `no` keeps everyone else (absent
///   included), `maybe` keeps everyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionStrategy {
    #[default]
    Ternary,
    TargetValue,
}

impl QuestionStrategy {
    /// Get a human-readable description of this strategy
    pub fn description(&self) -> &'static str {
        match self {
            QuestionStrategy::Ternary => "Ternary: answer with the stored yes/no/maybe value",
            QuestionStrategy::TargetValue => {
                "Target value: confirm or deny one anchor value (maybe keeps everyone)"
            }
        }
    }
}

impl fmt::Display for QuestionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionStrategy::Ternary => write!(f, "ternary"),
            QuestionStrategy::TargetValue => write!(f, "target_value"),
        }
    }
}

impl std::str::FromStr for QuestionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ternary" | "t" => Ok(QuestionStrategy::Ternary),
            "target_value" | "target-value" | "target" | "tv" => Ok(QuestionStrategy::TargetValue),
            _ => Err(format!("Invalid QuestionStrategy: {}", s)),
        }
    }
}
