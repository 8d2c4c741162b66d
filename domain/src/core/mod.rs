//! Core domain concepts shared across all subdomains.
//!
//! - [`player::PlayerId`] - identity sessions are keyed by
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod player;
