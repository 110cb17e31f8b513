// src/repositories/sqlite_key_value_store.rs
//
// SQLite-backed key-value store (kv_store table)

use std::sync::Arc;

use chrono::Utc;
use rusqlite::params;

use crate::db::{get_connection, initialize_database, ConnectionPool};
use crate::error::{AppError, AppResult};
use crate::repositories::KeyValueStore;

pub struct SqliteKeyValueStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteKeyValueStore {
    /// Wrap a pool, making sure the schema exists
    pub fn new(pool: Arc<ConnectionPool>) -> AppResult<Self> {
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
        }
        Ok(Self { pool })
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        let conn = get_connection(&self.pool)?;

        match conn.query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        ) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn save(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;

        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool_at, create_memory_pool};

    #[test]
    fn test_missing_key() {
        let store = SqliteKeyValueStore::new(Arc::new(create_memory_pool().unwrap())).unwrap();
        assert_eq!(store.load("portfolio_activities").unwrap(), None);
    }

    #[test]
    fn test_upsert() {
        let store = SqliteKeyValueStore::new(Arc::new(create_memory_pool().unwrap())).unwrap();
        store.save("k", "[1]").unwrap();
        store.save("k", "[1,2]").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn test_persists_across_pools() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.db");

        {
            let pool = Arc::new(create_connection_pool_at(&path).unwrap());
            let store = SqliteKeyValueStore::new(pool).unwrap();
            store.save("portfolio_activities", "[]").unwrap();
        }

        let pool = Arc::new(create_connection_pool_at(&path).unwrap());
        let store = SqliteKeyValueStore::new(pool).unwrap();
        assert_eq!(
            store.load("portfolio_activities").unwrap().as_deref(),
            Some("[]")
        );
    }
}
