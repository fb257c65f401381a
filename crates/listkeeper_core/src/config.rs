//! Runtime configuration for hosts embedding the core.
//!
//! # Responsibility
//! - Resolve database path, session key and logging settings from the
//!   environment, falling back to defaults.
//!
//! # Invariants
//! - A variable that is unset or blank after trim counts as absent.
//! - Resolution never fails; validation happens where values are used.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "LISTKEEPER_DB_PATH";
pub const ENV_SESSION: &str = "LISTKEEPER_SESSION";
pub const ENV_LOG_LEVEL: &str = "LISTKEEPER_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "LISTKEEPER_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "listkeeper_sessions.sqlite3";

/// Effective settings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// SQLite file holding session slots.
    pub db_path: PathBuf,
    /// Session to resume; `None` means start a fresh one.
    pub session_key: Option<String>,
    pub log_level: String,
    /// File logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            session_key: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl TrackerConfig {
    /// Resolves settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves settings through `lookup`, so callers can inject variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        Self {
            db_path: read(ENV_DB_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            session_key: read(ENV_SESSION),
            log_level: read(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: read(ENV_LOG_DIR).map(PathBuf::from),
        }
    }
}
