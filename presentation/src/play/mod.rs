//! Front ends that play games through the [`GameController`](mindreader_application::GameController).
//!
//! - [`repl::GameRepl`] - interactive terminal session
//! - [`script::ScriptRunner`] - plays a fixed list of answers

pub mod repl;
pub mod script;
