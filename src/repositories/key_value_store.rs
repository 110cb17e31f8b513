// src/repositories/key_value_store.rs
//
// Key-value persistence port
//
// The manager persists its whole collection as one text blob under one
// key. Anything able to load and save strings by key can back it.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{AppError, AppResult};

/// String-keyed persistence collaborator
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, or None when nothing was ever saved
    fn load(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value stored under `key`
    fn save(&self, key: &str, value: &str) -> AppResult<()>;
}

/// Process-local store, mostly for tests and embedding
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| AppError::Other("in-memory store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AppError::Other("in-memory store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
