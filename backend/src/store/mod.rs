//! SQLite persistence for users, sessions and received quote requests.
//!
//! `AppState` is cloned into every actix worker as `web::Data`. It only holds
//! the database location and the session lifetime; each request opens its own
//! connection through [`AppState::connect`], which also makes sure the schema
//! exists.

pub mod quotes;
pub mod sessions;
pub mod users;

use std::path::PathBuf;

use rusqlite::Connection;
use thiserror::Error;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id            TEXT PRIMARY KEY,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    first_name    TEXT NOT NULL,
    last_name     TEXT NOT NULL,
    display_name  TEXT NOT NULL,
    created_at    TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS sessions (
    access_token  TEXT PRIMARY KEY,
    refresh_token TEXT NOT NULL,
    user_id       TEXT NOT NULL REFERENCES users(id),
    expires_at    INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS quote_requests (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id     TEXT NOT NULL,
    data        TEXT NOT NULL,
    received_at TEXT NOT NULL
);
";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("stored payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("email `{0}` is already registered")]
    DuplicateEmail(String),
    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}

/// Shared application state handed to the HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub database_path: PathBuf,
    pub session_ttl_secs: i64,
}

impl AppState {
    pub fn new(database_path: impl Into<PathBuf>, session_ttl_secs: i64) -> Self {
        Self {
            database_path: database_path.into(),
            session_ttl_secs,
        }
    }

    /// Opens a connection with the schema in place.
    pub fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.database_path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(conn)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::AppState;
    use tempfile::TempDir;

    /// State backed by a fresh database inside `dir`.
    pub fn temp_state(dir: &TempDir) -> AppState {
        AppState::new(dir.path().join("procuroid-test.sqlite"), 3600)
    }
}
