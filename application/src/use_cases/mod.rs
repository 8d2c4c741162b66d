//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod game_controller;
pub mod game_reply;
