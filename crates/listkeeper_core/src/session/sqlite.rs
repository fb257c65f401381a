//! SQLite-backed session slots.
//!
//! # Responsibility
//! - Persist serialized session payloads across process restarts.
//!
//! # Invariants
//! - Requires a connection opened through `db::open_db*` (schema migrated).
//! - `set` is an upsert; one row per session key.

use crate::db::migrations::latest_version;
use crate::session::store::{SessionError, SessionKey, SessionResult, SessionStore};
use rusqlite::{params, Connection, OptionalExtension};

pub struct SqliteSessionStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSessionStore<'conn> {
    /// Wraps a migrated connection.
    ///
    /// Rejects connections whose schema was not brought up by `db::open_db*`.
    pub fn try_new(conn: &'conn Connection) -> SessionResult<Self> {
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != latest_version() {
            return Err(SessionError::UninitializedConnection {
                expected_version: latest_version(),
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

impl SessionStore for SqliteSessionStore<'_> {
    fn get(&self, key: &SessionKey) -> SessionResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM sessions WHERE session_key = ?1;",
                [key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn set(&self, key: &SessionKey, value: &str) -> SessionResult<()> {
        self.conn.execute(
            "INSERT INTO sessions (session_key, payload) VALUES (?1, ?2)
             ON CONFLICT(session_key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key.as_str(), value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &SessionKey) -> SessionResult<()> {
        self.conn.execute(
            "DELETE FROM sessions WHERE session_key = ?1;",
            [key.as_str()],
        )?;
        Ok(())
    }
}
