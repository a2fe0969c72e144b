//! Persistence layer for chatmock.
//!
//! Provides the durable string-keyed store abstraction and the write-through
//! scenario catalog store built on top of it.

pub mod kv_store;
pub mod scenario_store;

pub use crate::kv_store::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
pub use crate::scenario_store::ScenarioCatalogStore;
