//! JSONL game transcript.
//!
//! Every [`TranscriptEvent`] becomes one line: the event's own fields under
//! its `type` tag, stamped with the UTC time it was written.
//!
//! ```text
//! {"timestamp":"2026-10-15T09:12:03.114Z","type":"game_started","player":"42","strategy":"ternary","candidates":3}
//! {"timestamp":"2026-10-15T09:12:05.870Z","type":"answer_received","player":"42","attribute":"has_beard","answer":"no","remaining":2}
//! ```

use chrono::{SecondsFormat, Utc};
use mindreader_application::ports::transcript_logger::{TranscriptEvent, TranscriptLogger};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;

#[derive(Serialize)]
struct TranscriptLine<'a> {
    timestamp: String,
    #[serde(flatten)]
    event: &'a TranscriptEvent,
}

/// Appends game events to a JSONL file.
///
/// Lines are flushed as they are written. The first failed write is
/// reported through `tracing`; later ones are dropped silently.
pub struct JsonlTranscriptLogger {
    file: Mutex<BufWriter<File>>,
    path: PathBuf,
    write_failed: AtomicBool,
}

impl JsonlTranscriptLogger {
    /// Open `path` for appending, creating it and its parent directories.
    ///
    /// Returns `None` (after a warning) when the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        match Self::open(path) {
            Ok(file) => Some(Self {
                file: Mutex::new(BufWriter::new(file)),
                path: path.to_path_buf(),
                write_failed: AtomicBool::new(false),
            }),
            Err(e) => {
                warn!("Could not open transcript {}: {}", path.display(), e);
                None
            }
        }
    }

    fn open(path: &Path) -> io::Result<File> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, event: &TranscriptEvent) -> io::Result<()> {
        let line = TranscriptLine {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            event,
        };
        let json = serde_json::to_string(&line)?;

        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("transcript writer poisoned"))?;
        writeln!(file, "{}", json)?;
        file.flush()
    }
}

impl TranscriptLogger for JsonlTranscriptLogger {
    fn log(&self, event: TranscriptEvent) {
        if let Err(e) = self.write(&event)
            && !self.write_failed.swap(true, Ordering::Relaxed)
        {
            warn!(
                "Dropping {} transcript event for player {}: {} ({})",
                event.kind(),
                event.player(),
                e,
                self.path.display()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindreader_domain::{AnswerToken, GameState, PlayerId, QuestionStrategy};
    use serde_json::Value;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn started(player: &str) -> TranscriptEvent {
        TranscriptEvent::GameStarted {
            player: PlayerId::new(player),
            strategy: QuestionStrategy::Ternary,
            candidates: 3,
        }
    }

    #[test]
    fn test_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.jsonl");
        let logger = JsonlTranscriptLogger::new(&path).unwrap();

        logger.log(started("42"));
        logger.log(TranscriptEvent::AnswerReceived {
            player: PlayerId::new("42"),
            attribute: "has_beard".to_string(),
            answer: AnswerToken::No,
            remaining: 2,
        });
        logger.log(TranscriptEvent::GameFinished {
            player: PlayerId::new("42"),
            outcome: GameState::Guessed,
            character_name: Some("Harry Potter".to_string()),
            reason: None,
            questions: 2,
        });

        // Flushed per line, readable while the logger is still open
        let lines = read_lines(&path);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["type"], "game_started");
        assert_eq!(lines[0]["strategy"], "ternary");
        assert_eq!(lines[0]["candidates"], 3);
        assert_eq!(lines[1]["answer"], "no");
        assert_eq!(lines[1]["remaining"], 2);
        assert_eq!(lines[2]["outcome"], "guessed");
        assert_eq!(lines[2]["character_name"], "Harry Potter");
        assert!(lines[2].get("reason").is_none());
    }

    #[test]
    fn test_timestamp_is_rfc3339_utc() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.jsonl");
        let logger = JsonlTranscriptLogger::new(&path).unwrap();

        logger.log(TranscriptEvent::GameAbandoned {
            player: PlayerId::new("7"),
            asked: 1,
            candidates: 2,
        });

        let lines = read_lines(&path);
        let timestamp = lines[0]["timestamp"].as_str().unwrap();
        assert!(timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[test]
    fn test_appends_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("games.jsonl");

        for player in ["1", "2"] {
            let logger = JsonlTranscriptLogger::new(&path).unwrap();
            logger.log(started(player));
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["player"], "1");
        assert_eq!(lines[1]["player"], "2");
        assert_eq!(JsonlTranscriptLogger::new(&path).unwrap().path(), path);
    }

    #[test]
    fn test_returns_none_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        assert!(JsonlTranscriptLogger::new(blocker.join("games.jsonl")).is_none());
    }
}
