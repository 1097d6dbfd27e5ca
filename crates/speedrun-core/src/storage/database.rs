//! SQLite-backed key/value persistence.
//!
//! The engine itself never touches this; the host loads the store,
//! applies operations, and writes back after every mutation. The
//! timer collection lives under [`TIMERS_KEY`] as a JSON array.

use rusqlite::{params, Connection};

use super::data_dir;
use crate::error::{CoreError, DatabaseError};
use crate::timer::TimerStore;

/// Key holding the timer collection as a JSON array.
pub const TIMERS_KEY: &str = "timers";

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (and migrate) the on-disk database.
    pub fn open() -> Result<Self, DatabaseError> {
        let path = data_dir()?.join("speedrun.db");
        let conn = Connection::open(&path)
            .map_err(|source| DatabaseError::OpenFailed { path, source })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Load the persisted timer collection, or an empty store when
    /// nothing has been written yet.
    pub fn load_timers(&self) -> Result<TimerStore, CoreError> {
        match self.kv_get(TIMERS_KEY)? {
            Some(json) => Ok(TimerStore::from_json(&json)?),
            None => Ok(TimerStore::new()),
        }
    }

    /// Persist the timer collection. Called after every mutating
    /// operation.
    pub fn save_timers(&self, store: &TimerStore) -> Result<(), CoreError> {
        let json = store.to_json()?;
        self.kv_set(TIMERS_KEY, &json)?;
        Ok(())
    }
}
