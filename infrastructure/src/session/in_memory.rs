//! In-memory session store.
//!
//! Sessions live in a sharded [`DashMap`] keyed by player. Each entry is an
//! `Arc<tokio::sync::Mutex<..>>` slot: the map is only touched to find or
//! create a slot, and the per-player mutex serializes read-modify-write
//! cycles for that player alone.
//!
//! Map guards are never held across an `.await`. Empty slots are pruned
//! once no other task holds a handle to them.

use async_trait::async_trait;
use dashmap::DashMap;
use mindreader_application::ports::session_store::SessionStore;
use mindreader_domain::{PlayerId, Session};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::trace;

type Slot = Arc<Mutex<Option<Session>>>;

/// Process-local, non-persistent [`SessionStore`]
#[derive(Default)]
pub struct InMemorySessionStore {
    slots: DashMap<PlayerId, Slot>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The player's slot, created empty if missing
    fn slot(&self, player: &PlayerId) -> Slot {
        Arc::clone(self.slots.entry(player.clone()).or_default().value())
    }

    fn existing_slot(&self, player: &PlayerId) -> Option<Slot> {
        self.slots.get(player).map(|entry| Arc::clone(entry.value()))
    }

    /// Drop the player's slot if it is empty and nobody else holds it.
    ///
    /// Runs under the shard lock, so no task can pick up a new handle to
    /// the slot while it is being checked.
    fn prune(&self, player: &PlayerId) {
        let removed = self.slots.remove_if(player, |_, slot| {
            Arc::strong_count(slot) == 1 && slot.try_lock().is_ok_and(|guard| guard.is_none())
        });
        if removed.is_some() {
            trace!("Pruned empty session slot for player {}", player);
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, player: &PlayerId, session: Session) -> Option<Session> {
        let slot = self.slot(player);
        let mut guard = slot.lock().await;
        guard.replace(session)
    }

    async fn get(&self, player: &PlayerId) -> Option<Session> {
        let slot = self.existing_slot(player)?;
        let session = slot.lock().await.clone();
        session
    }

    async fn update<F, R>(&self, player: &PlayerId, f: F) -> R
    where
        F: FnOnce(&mut Option<Session>) -> R + Send,
        R: Send,
    {
        let slot = self.slot(player);
        let result = {
            let mut guard = slot.lock().await;
            f(&mut *guard)
        };
        drop(slot);
        self.prune(player);
        result
    }

    async fn delete(&self, player: &PlayerId) -> Option<Session> {
        let slot = self.existing_slot(player)?;
        let removed = slot.lock().await.take();
        drop(slot);
        self.prune(player);
        removed
    }

    async fn len(&self) -> usize {
        let slots: Vec<Slot> = self
            .slots
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();

        let mut live = 0;
        for slot in slots {
            if slot.lock().await.is_some() {
                live += 1;
            }
        }
        live
    }
}
