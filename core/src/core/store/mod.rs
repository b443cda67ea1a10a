//! Persistence adapter: an embedded key-value store holding JSON documents.
//!
//! Two fixed keys are used: `"catalog"` holds the full movie collection as a
//! JSON array and `"session"` holds the current session object. Every write
//! replaces the whole value and commits before returning, so reopening the
//! store immediately after any completed operation observes the latest state.
//! Absent keys are legitimate empty/default states, not errors.

use crate::error::StoreError;
use crate::types::{Config, MovieRecord, Session};
use redb::{ReadableDatabase, ReadableTable, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// State table: &str key → JSON string.
const STATE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("state");

/// Key holding the catalog as a JSON array of movie records.
const KEY_CATALOG: &str = "catalog";

/// Key holding the current session; absent means signed out.
const KEY_SESSION: &str = "session";

pub struct Store {
    db: redb::Database,
}

impl Store {
    /// Creates or opens the store at the configured path.
    pub fn open(config: &Config) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&config.base_path)?;

        let db = redb::Database::create(config.db_path())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(STATE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db })
    }
}

/// Catalog persistence.
impl Store {
    /// Returns the persisted catalog, or `None` if nothing was saved yet.
    pub fn load_catalog(&self) -> Result<Option<Vec<MovieRecord>>, StoreError> {
        self.read_json(KEY_CATALOG)
    }

    /// Replaces the persisted catalog with the full collection. There are no
    /// partial or merge semantics.
    pub fn save_catalog(&mut self, catalog: &[MovieRecord]) -> Result<(), StoreError> {
        self.write_json(KEY_CATALOG, catalog)
    }
}

/// Session persistence.
impl Store {
    /// Returns the persisted session, or `None` when signed out.
    pub fn load_session(&self) -> Result<Option<Session>, StoreError> {
        self.read_json(KEY_SESSION)
    }

    pub fn save_session(&mut self, session: &Session) -> Result<(), StoreError> {
        self.write_json(KEY_SESSION, session)
    }

    /// Removes the persisted session. Clearing an absent session is a no-op.
    pub fn clear_session(&mut self) -> Result<(), StoreError> {
        self.remove(KEY_SESSION)
    }
}

/// JSON helpers.
impl Store {
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(STATE_TABLE)?;

        match table.get(key)? {
            None => Ok(None),
            Some(guard) => Ok(Some(serde_json::from_str(guard.value())?)),
        }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(STATE_TABLE)?;
            table.insert(key, json.as_str())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(STATE_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
