//! JSON output formatter for game replies.
//!
//! One compact JSON object per reply, so scripted runs produce JSON lines.

use crate::output::formatter::ReplyFormatter;
use mindreader_application::{GameError, GameReply};
use serde_json::json;

/// Formats game replies as JSON
pub struct JsonFormatter;

impl ReplyFormatter for JsonFormatter {
    fn format_reply(&self, reply: &GameReply) -> String {
        serde_json::to_string(reply).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_error(&self, error: &GameError) -> String {
        json!({
            "type": "error",
            "message": error.to_string(),
            "recoverable": error.is_recoverable(),
        })
        .to_string()
    }
}
