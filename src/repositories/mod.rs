// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO quota enforcement
// - NO event emission

pub mod activity_repository;
pub mod key_value_store;
pub mod sqlite_key_value_store;

pub use activity_repository::ActivityRepository;
pub use key_value_store::{InMemoryKeyValueStore, KeyValueStore};
pub use sqlite_key_value_store::SqliteKeyValueStore;

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
