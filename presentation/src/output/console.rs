//! Console output formatter for game replies

use crate::output::formatter::ReplyFormatter;
use colored::Colorize;
use mindreader_application::{GameError, GameReply, QuestionPayload, TerminalKind, TerminalPayload};
use mindreader_domain::{Catalog, DomainError, GiveUpReason, Session};

/// Shown before the first question
pub const GREETING: &str =
    "Think of a character. I will try to guess it by asking yes/no/maybe questions.";

/// Shown when an answer arrives without a game in progress
pub const NO_SESSION: &str = "Please start a new game with /start";

/// `/status` lists remaining names once this few are left
const SHOW_CANDIDATES_AT: usize = 5;

/// Formats game replies for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn greeting() -> String {
        GREETING.bold().to_string()
    }

    /// The question sentence, without the answer options
    pub fn question_text(question: &QuestionPayload) -> String {
        match &question.anchor {
            Some(anchor) => format!(
                "Is your character's {}: {}?",
                question.attribute_text, anchor
            ),
            None => format!("Is your character: {}?", question.attribute_text),
        }
    }

    pub fn format_question(question: &QuestionPayload) -> String {
        let options = question
            .options
            .iter()
            .map(|o| o.as_str())
            .collect::<Vec<_>>()
            .join(" / ");
        format!(
            "{} {}",
            Self::question_text(question).cyan().bold(),
            format!("[{}]", options).dimmed()
        )
    }

    pub fn terminal_text(terminal: &TerminalPayload) -> String {
        match (terminal.kind, terminal.reason) {
            (TerminalKind::Guessed, _) => format!(
                "Is it... {}?",
                terminal.character_name.as_deref().unwrap_or("?")
            ),
            (TerminalKind::GaveUp, Some(GiveUpReason::NoDiscriminatingQuestion)) => {
                "I don't have any more questions! I give up.".to_string()
            }
            (TerminalKind::GaveUp, _) => "I give up!".to_string(),
        }
    }

    pub fn format_terminal(terminal: &TerminalPayload) -> String {
        let text = Self::terminal_text(terminal);
        match terminal.kind {
            TerminalKind::Guessed => text.green().bold().to_string(),
            TerminalKind::GaveUp => text.yellow().bold().to_string(),
        }
    }

    pub fn error_text(error: &GameError) -> String {
        match error {
            GameError::SessionNotFound(_) => NO_SESSION.to_string(),
            GameError::Domain(DomainError::InvalidAnswer { expected, .. }) => {
                format!("Please answer with one of: {}", expected)
            }
            GameError::Domain(DomainError::StaleAnswer { .. }) => {
                "That answer was for an earlier question.".to_string()
            }
            GameError::Domain(e) => e.to_string(),
        }
    }

    /// Summary of a game in progress (for `/status`)
    pub fn format_status(session: Option<&Session>, catalog: &Catalog) -> String {
        let Some(session) = session else {
            return format!("{}", "No game in progress.".dimmed());
        };

        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            "Strategy:".cyan().bold(),
            session.strategy()
        ));
        output.push_str(&format!(
            "{} {} of {}\n",
            "Candidates:".cyan().bold(),
            session.candidates().len(),
            catalog.len()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Questions asked:".cyan().bold(),
            session.asked().len()
        ));
        for answered in session.history() {
            output.push_str(&format!(
                "  * {} {}\n",
                answered.question.attribute_text(),
                format!("-> {}", answered.answer).dimmed()
            ));
        }
        if session.candidates().len() <= SHOW_CANDIDATES_AT {
            let names: Vec<&str> = session.candidates().names(catalog).collect();
            output.push_str(&format!(
                "{} {}\n",
                "Still possible:".cyan().bold(),
                names.join(", ")
            ));
        }
        output
    }
}

impl ReplyFormatter for ConsoleFormatter {
    fn format_reply(&self, reply: &GameReply) -> String {
        match reply {
            GameReply::Question(question) => Self::format_question(question),
            GameReply::Terminal(terminal) => Self::format_terminal(terminal),
        }
    }

    fn format_error(&self, error: &GameError) -> String {
        Self::error_text(error).red().to_string()
    }
}
