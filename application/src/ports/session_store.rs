//! Session store port
//!
//! Defines the interface for keeping per-player game sessions between
//! calls. Sessions are ephemeral: a store never has to survive a restart.

use async_trait::async_trait;
use mindreader_domain::{PlayerId, Session};

/// Keyed, ephemeral storage for game sessions.
///
/// Implementations must serialize [`update`](Self::update) calls for the same
/// player so that a read-modify-write never loses a concurrent change, while
/// calls for different players proceed independently.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store `session` for `player`, returning the session it replaced
    async fn create(&self, player: &PlayerId, session: Session) -> Option<Session>;

    /// Snapshot of the player's session
    async fn get(&self, player: &PlayerId) -> Option<Session>;

    /// Run `f` on the player's slot while holding that player's lock.
    ///
    /// The slot is `None` when no session exists. Setting it to `None`
    /// deletes the session; filling it creates one.
    async fn update<F, R>(&self, player: &PlayerId, f: F) -> R
    where
        F: FnOnce(&mut Option<Session>) -> R + Send,
        R: Send;

    /// Remove the player's session, returning it if one existed
    async fn delete(&self, player: &PlayerId) -> Option<Session>;

    /// Number of live sessions
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
