//! Game domain: the per-player state machine.
//!
//! `Init → Asking → {Guessed | GaveUp}`. Each evaluation runs, in strict
//! priority order:
//!
//! 1. no candidates left → `GaveUp`
//! 2. exactly one candidate → `Guessed`
//! 3. no eligible question → `GaveUp`
//! 4. otherwise ask the selected question

pub mod session;
pub mod turn;

pub use session::{AnsweredQuestion, Session};
pub use turn::{GameState, GiveUpReason, Turn};
