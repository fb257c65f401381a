//! Session slot contract.
//!
//! # Responsibility
//! - Define the durable per-session key-value slot the core reads at request
//!   start and writes at request end.
//! - Define session keys and the error type shared by all adapters.
//!
//! # Invariants
//! - Session keys are never blank.
//! - Adapters store payloads verbatim; they never inspect them.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type SessionResult<T> = Result<T, SessionError>;

/// Errors raised while reading or writing a session slot.
#[derive(Debug)]
pub enum SessionError {
    /// Session key is blank after trim.
    InvalidKey,
    /// Storage backend failure.
    Db(DbError),
    /// Connection schema is not at the version this build migrates to.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Stored payload cannot be decoded into valid session state.
    Corrupt(String),
    /// Session state could not be encoded for storage.
    Encode(String),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey => write!(f, "session key must not be blank"),
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "session store requires schema version {expected_version}, got {actual_version}"
            ),
            Self::Corrupt(message) => write!(f, "corrupt session payload: {message}"),
            Self::Encode(message) => write!(f, "failed to encode session state: {message}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for SessionError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SessionError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Opaque identifier of one browser/user session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey(String);

impl SessionKey {
    /// Creates a fresh random key for a session seen for the first time.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Accepts an externally supplied key, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> SessionResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SessionError::InvalidKey);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SessionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Durable per-session slot holding one serialized payload.
pub trait SessionStore {
    fn get(&self, key: &SessionKey) -> SessionResult<Option<String>>;
    fn set(&self, key: &SessionKey, value: &str) -> SessionResult<()>;
    fn remove(&self, key: &SessionKey) -> SessionResult<()>;
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self, key: &SessionKey) -> SessionResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &SessionKey, value: &str) -> SessionResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &SessionKey) -> SessionResult<()> {
        (**self).remove(key)
    }
}
