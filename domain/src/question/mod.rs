//! Question domain: what to ask next and what an answer means.
//!
//! - [`strategy::QuestionStrategy`] - ternary vs. target-value formulation
//! - [`value_objects::Question`] / [`value_objects::AnswerToken`]
//! - [`selector::QuestionSelector`] - most balanced split, deterministic ties
//! - [`filter::apply_answer`] - narrowing the candidate set

pub mod filter;
pub mod selector;
pub mod strategy;
pub mod value_objects;

pub use filter::apply_answer;
pub use selector::{QuestionSelector, balance_score, partition};
pub use strategy::QuestionStrategy;
pub use value_objects::{AnswerToken, Question};
