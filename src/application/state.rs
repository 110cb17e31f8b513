// src/application/state.rs
//
// Shared application state for embedding front-ends.
//
// The manager and the edit session sit behind mutexes so every
// validate-then-commit sequence runs without interleaving.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::db::create_connection_pool;
use crate::domain::PortfolioConfig;
use crate::error::{AppError, AppResult};
use crate::events::EventBus;
use crate::repositories::{KeyValueStore, SqliteKeyValueStore};
use crate::services::ActivityManager;

use super::session::EditSession;

pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub config: Arc<PortfolioConfig>,
    manager: Mutex<ActivityManager>,
    session: Mutex<EditSession>,
}

impl AppState {
    /// Wire the manager on top of `store`
    pub fn initialize(store: Arc<dyn KeyValueStore>, config: PortfolioConfig) -> AppResult<Self> {
        config.validate()?;

        let event_bus = Arc::new(EventBus::new());
        let config = Arc::new(config);
        let manager = ActivityManager::new(store, Arc::clone(&config), Arc::clone(&event_bus))?;

        Ok(Self {
            event_bus,
            config,
            manager: Mutex::new(manager),
            session: Mutex::new(EditSession::new()),
        })
    }

    /// Default configuration backed by the SQLite database in the user's data dir
    pub fn open_default() -> AppResult<Self> {
        let pool = Arc::new(create_connection_pool()?);
        let store: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::new(pool)?);

        log::info!("Opened portfolio database");
        Self::initialize(store, PortfolioConfig::default())
    }

    pub fn manager(&self) -> AppResult<MutexGuard<'_, ActivityManager>> {
        self.manager
            .lock()
            .map_err(|_| AppError::Other("activity manager lock poisoned".to_string()))
    }

    pub fn session(&self) -> AppResult<MutexGuard<'_, EditSession>> {
        self.session
            .lock()
            .map_err(|_| AppError::Other("edit session lock poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::domain::ActivityDraft;
    use crate::events::ActivityAdded;
    use crate::repositories::InMemoryKeyValueStore;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_initialize_seeds_samples() {
        let state = AppState::initialize(
            Arc::new(InMemoryKeyValueStore::new()),
            PortfolioConfig::default(),
        )
        .unwrap();

        assert_eq!(state.manager().unwrap().len(), 3);
        assert_eq!(state.event_bus.get_event_log().len(), 1);
    }

    #[test]
    fn test_initialize_rejects_invalid_config() {
        let config = PortfolioConfig {
            themes: Vec::new(),
            ..Default::default()
        };

        let result = AppState::initialize(Arc::new(InMemoryKeyValueStore::new()), config);

        assert!(matches!(result, Err(AppError::Domain(_))));
    }

    #[test]
    fn test_submit_through_state_survives_restart() {
        let pool = Arc::new(create_memory_pool().unwrap());
        let store: Arc<dyn KeyValueStore> =
            Arc::new(SqliteKeyValueStore::new(Arc::clone(&pool)).unwrap());
        let state = AppState::initialize(Arc::clone(&store), PortfolioConfig::default()).unwrap();

        let added = Arc::new(AtomicUsize::new(0));
        let added_clone = Arc::clone(&added);
        state.event_bus.subscribe::<ActivityAdded, _>(move |_| {
            added_clone.fetch_add(1, Ordering::SeqCst);
        });

        {
            let mut manager = state.manager().unwrap();
            let mut session = state.session().unwrap();
            session.begin_add();
            session
                .submit(
                    &mut manager,
                    ActivityDraft {
                        theme: Some("Droit IT".to_string()),
                        name: Some("RGPD".to_string()),
                        activity_type: Some("formation_ligne".to_string()),
                        date: NaiveDate::from_ymd_opt(2024, 10, 2),
                        hours: Some(4),
                        proof: Some("Certificat".to_string()),
                        ..Default::default()
                    },
                )
                .unwrap();
        }
        assert_eq!(added.load(Ordering::SeqCst), 1);

        let reopened = AppState::initialize(store, PortfolioConfig::default()).unwrap();
        let manager = reopened.manager().unwrap();
        assert_eq!(manager.len(), 4);
        assert_eq!(manager.stats().total_hours, 32);
    }
}
