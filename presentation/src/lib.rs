//! Presentation layer for mindreader
//!
//! This crate contains CLI definitions, output formatters,
//! the interactive REPL and the scripted runner.

pub mod cli;
pub mod config;
pub mod output;
pub mod play;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputArg, StrategyArg};
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::{ReplyFormatter, formatter_for};
pub use output::json::JsonFormatter;
pub use play::repl::{GameRepl, ReplStep};
pub use play::script::{ScriptRun, ScriptRunner};
