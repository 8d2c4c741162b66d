//! Output formatter trait

use mindreader_application::{GameError, GameReply};
use mindreader_domain::OutputFormat;

/// Trait for rendering game replies
pub trait ReplyFormatter: Send + Sync {
    /// Render the next question or the final outcome
    fn format_reply(&self, reply: &GameReply) -> String;

    /// Render a rejected or failed call
    fn format_error(&self, error: &GameError) -> String;
}

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn ReplyFormatter> {
    match format {
        OutputFormat::Text => Box::new(super::console::ConsoleFormatter),
        OutputFormat::Json => Box::new(super::json::JsonFormatter),
    }
}
