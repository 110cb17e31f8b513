// src/repositories/activity_repository.rs
//
// Activity collection persistence
//
// The collection is stored as a JSON array of activity records under a
// single key. Records are read leniently through `ActivityDraft`, so older
// or partial records still load.

use std::sync::Arc;

use crate::domain::{Activity, ActivityDraft};
use crate::error::{AppError, AppResult};
use crate::repositories::KeyValueStore;

pub struct ActivityRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl ActivityRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persisted collection.
    ///
    /// Nothing stored yields an empty collection. Content that is not a JSON
    /// array yields `AppError::CorruptedData`. Inside the array each record
    /// is read on its own: an unreadable record is logged and skipped, the
    /// others still load. Store failures propagate as-is.
    pub fn load_all(&self) -> AppResult<Vec<Activity>> {
        let Some(raw) = self.store.load(&self.key)? else {
            return Ok(Vec::new());
        };

        let records: Vec<serde_json::Value> = serde_json::from_str(&raw)
            .map_err(|e| AppError::CorruptedData(format!("key '{}': {}", self.key, e)))?;

        let mut activities = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<ActivityDraft>(record) {
                Ok(draft) => activities.push(Activity::from_draft(draft)),
                Err(e) => log::warn!("Skipping unreadable activity record #{}: {}", index, e),
            }
        }

        Ok(activities)
    }

    /// Replace the persisted collection
    pub fn save_all(&self, activities: &[Activity]) -> AppResult<()> {
        let json = serde_json::to_string(activities)?;
        self.store.save(&self.key, &json)
    }
}
