//! Reply payloads handed to transports.
//!
//! Every controller call that advances a game answers with a [`GameReply`]:
//! either the next question or a terminal outcome. Both serialize to tagged
//! JSON so a chat transport or the CLI's JSON output can pass them on as is.

use mindreader_domain::{AnswerToken, GiveUpReason, Question, Turn};
use serde::{Deserialize, Serialize};

/// A question to put to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    pub attribute: String,
    /// Attribute name with underscores shown as spaces
    pub attribute_text: String,
    pub options: Vec<AnswerToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

impl From<&Question> for QuestionPayload {
    fn from(question: &Question) -> Self {
        Self {
            attribute: question.attribute().to_string(),
            attribute_text: question.attribute_text(),
            options: question.options().to_vec(),
            anchor: question.anchor().map(str::to_string),
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalKind {
    Guessed,
    GaveUp,
}

/// A game's final outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalPayload {
    pub kind: TerminalKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<GiveUpReason>,
}

impl TerminalPayload {
    pub fn guessed(name: impl Into<String>) -> Self {
        Self {
            kind: TerminalKind::Guessed,
            character_name: Some(name.into()),
            reason: None,
        }
    }

    pub fn gave_up(reason: GiveUpReason) -> Self {
        Self {
            kind: TerminalKind::GaveUp,
            character_name: None,
            reason: Some(reason),
        }
    }
}

/// What a transport should show the player next
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameReply {
    Question(QuestionPayload),
    Terminal(TerminalPayload),
}

impl GameReply {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameReply::Terminal(_))
    }

    pub fn question(&self) -> Option<&QuestionPayload> {
        match self {
            GameReply::Question(payload) => Some(payload),
            GameReply::Terminal(_) => None,
        }
    }

    pub fn terminal(&self) -> Option<&TerminalPayload> {
        match self {
            GameReply::Terminal(payload) => Some(payload),
            GameReply::Question(_) => None,
        }
    }
}

impl From<Turn> for GameReply {
    fn from(turn: Turn) -> Self {
        match turn {
            Turn::Ask(question) => GameReply::Question(QuestionPayload::from(&question)),
            Turn::Guessed { name } => GameReply::Terminal(TerminalPayload::guessed(name)),
            Turn::GaveUp(reason) => GameReply::Terminal(TerminalPayload::gave_up(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_question_reply_json() {
        let reply = GameReply::from(Turn::Ask(Question::ternary("is_fictional")));
        let value = serde_json::to_value(&reply).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "question",
                "attribute": "is_fictional",
                "attributeText": "is fictional",
                "options": ["yes", "no", "maybe"],
            })
        );
    }

    #[test]
    fn test_anchored_question_reply_json() {
        let reply = GameReply::from(Turn::Ask(Question::anchored("hair_color", "red")));
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["anchor"], "red");
    }

    #[test]
    fn test_terminal_reply_json() {
        let guessed = GameReply::from(Turn::Guessed {
            name: "Sherlock Holmes".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&guessed).unwrap(),
            json!({"type": "terminal", "kind": "guessed", "characterName": "Sherlock Holmes"})
        );

        let gave_up = GameReply::from(Turn::GaveUp(GiveUpReason::NoCandidates));
        assert_eq!(
            serde_json::to_value(&gave_up).unwrap(),
            json!({"type": "terminal", "kind": "gave_up", "reason": "no_candidates"})
        );
        assert!(gave_up.is_terminal());
    }

    #[test]
    fn test_reply_deserializes() {
        let reply: GameReply = serde_json::from_value(json!({
            "type": "terminal",
            "kind": "gave_up",
            "reason": "no_discriminating_question"
        }))
        .unwrap();
        assert_eq!(
            reply.terminal(),
            Some(&TerminalPayload::gave_up(
                GiveUpReason::NoDiscriminatingQuestion
            ))
        );
    }
}
