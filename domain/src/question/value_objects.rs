//! Question and answer value objects

use super::strategy::QuestionStrategy;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A selectable answer (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerToken {
    Yes,
    No,
    Maybe,
}

impl AnswerToken {
    /// All tokens, in the order they are offered to the player
    pub const ALL: [AnswerToken; 3] = [AnswerToken::Yes, AnswerToken::No, AnswerToken::Maybe];

    /// Canonical lowercase form; also the literal compared against stored values
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerToken::Yes => "yes",
            AnswerToken::No => "no",
            AnswerToken::Maybe => "maybe",
        }
    }
}

impl std::fmt::Display for AnswerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AnswerToken {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Ok(AnswerToken::Yes),
            "no" => Ok(AnswerToken::No),
            "maybe" => Ok(AnswerToken::Maybe),
            _ => Err(format!("Invalid AnswerToken: {}", s)),
        }
    }
}

/// A question about one attribute (Value Object)
///
/// Under the ternary strategy `anchor` is `None`; under the target-value
/// strategy it holds the value the player confirms or denies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    attribute: String,
    options: Vec<AnswerToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    anchor: Option<String>,
}

impl Question {
    /// A ternary question: answers are matched literally against stored values
    pub fn ternary(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            options: AnswerToken::ALL.to_vec(),
            anchor: None,
        }
    }

    /// A target-value question anchored to one concrete value
    pub fn anchored(attribute: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            options: AnswerToken::ALL.to_vec(),
            anchor: Some(anchor.into()),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn options(&self) -> &[AnswerToken] {
        &self.options
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    /// The strategy this question was formulated under
    pub fn strategy(&self) -> QuestionStrategy {
        if self.anchor.is_some() {
            QuestionStrategy::TargetValue
        } else {
            QuestionStrategy::Ternary
        }
    }

    /// Attribute name as shown to players (`is_fictional` -> `is fictional`)
    pub fn attribute_text(&self) -> String {
        self.attribute.replace('_', " ")
    }

    pub fn accepts(&self, token: AnswerToken) -> bool {
        self.options.contains(&token)
    }

    /// Parse raw player input into one of this question's options
    pub fn parse_answer(&self, raw: &str) -> Result<AnswerToken, DomainError> {
        raw.parse::<AnswerToken>()
            .ok()
            .filter(|token| self.accepts(*token))
            .ok_or_else(|| DomainError::InvalidAnswer {
                token: raw.to_string(),
                expected: self.options_text(),
            })
    }

    /// Options joined for display, e.g. `yes, no, maybe`
    pub fn options_text(&self) -> String {
        self.options
            .iter()
            .map(AnswerToken::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
