use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::seed;

/// Stable collection keys of the flat store namespace.
pub mod keys {
    pub const USERS: &str = "users";
    pub const CURRENT_USER: &str = "currentUser";
    pub const MENU_ITEMS: &str = "menuItems";
    pub const EMPLOYEES: &str = "employees";
    pub const SALES: &str = "sales";
}

/// Durable key-value store of named collections. Each key maps to one whole
/// collection serialized as JSON; mutations always replace the entire value
/// (read-modify-write, no partial-record updates).
pub struct Store {
    conn: Mutex<Connection>,
    // Last issued id token, so rapid allocations within a session never
    // collide even when the clock does not advance.
    last_id: Mutex<i64>,
}

impl Store {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_conn(Connection::open(path)?))
    }

    /// Backed by an in-memory database; contents vanish on drop. Used by
    /// tests and throwaway sessions.
    pub fn in_memory() -> Result<Self> {
        Ok(Self::from_conn(Connection::open_in_memory()?))
    }

    fn from_conn(conn: Connection) -> Self {
        Store {
            conn: Mutex::new(conn),
            last_id: Mutex::new(0),
        }
    }

    /// Creates the schema and seeds first-run defaults (accounts and the
    /// default menu catalog). Seeding only applies to absent keys, so
    /// calling this on an existing store changes nothing.
    pub fn initialize(&self) -> Result<()> {
        {
            let conn = self.conn.lock().map_err(|_| Error::LockPoisoned)?;
            conn.execute_batch(
                "
                CREATE TABLE IF NOT EXISTS kv (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );
                ",
            )?;
        }
        seed::apply(self)
    }

    fn read_raw(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().map_err(|_| Error::LockPoisoned)?;
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write_raw(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().map_err(|_| Error::LockPoisoned)?;
        conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            [key, value],
        )?;
        Ok(())
    }

    /// Single object under `key`, or `None` when absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.read_raw(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.write_raw(key, &serde_json::to_string(value)?)
    }

    pub fn delete(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock().map_err(|_| Error::LockPoisoned)?;
        conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }

    /// Whole collection under `key`; an absent key reads as empty.
    pub fn collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        Ok(self.get(key)?.unwrap_or_default())
    }

    /// Atomically replaces the whole collection under `key`.
    pub fn put_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        self.put(key, &items)
    }

    pub fn has_key(&self, key: &str) -> Result<bool> {
        Ok(self.read_raw(key)?.is_some())
    }

    /// Allocates an opaque id token. Time-derived (epoch millis) but bumped
    /// monotonically past the previously issued token, so ids are unique
    /// within a session even under rapid allocation.
    pub fn next_id(&self) -> Result<String> {
        let mut last = self.last_id.lock().map_err(|_| Error::LockPoisoned)?;
        let now = Utc::now().timestamp_millis();
        let id = if now > *last { now } else { *last + 1 };
        *last = id;
        Ok(id.to_string())
    }
}
