//! Output formatting for game replies

pub mod console;
pub mod formatter;
pub mod json;
