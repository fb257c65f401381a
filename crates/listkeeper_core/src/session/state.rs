//! Serialized per-session state.
//!
//! # Invariants
//! - A flash value is surfaced once, then cleared.
//! - Unknown payload fields are ignored; missing fields take defaults.

use crate::session::store::{SessionError, SessionResult};
use crate::store::collection::Collection;
use serde::{Deserialize, Serialize};

/// Transient one-shot message for the next rendered response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Flash {
    Success(String),
    Error(String),
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Everything one session keeps between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub collection: Collection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash: Option<Flash>,
}

impl SessionState {
    pub fn decode(payload: &str) -> SessionResult<Self> {
        serde_json::from_str(payload).map_err(|err| SessionError::Corrupt(err.to_string()))
    }

    pub fn encode(&self) -> SessionResult<String> {
        serde_json::to_string(self).map_err(|err| SessionError::Encode(err.to_string()))
    }
}
