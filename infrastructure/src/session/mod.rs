//! Session stores: where games in progress live between calls.

mod in_memory;

pub use in_memory::InMemorySessionStore;
