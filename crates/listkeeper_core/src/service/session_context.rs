//! Per-request session context.
//!
//! # Responsibility
//! - Load one session's state from its slot at request start.
//! - Hand the collection to store operations by `&mut`.
//! - Write the state back at request end.
//!
//! # Invariants
//! - A missing slot yields an empty collection; it is never an error.
//! - One context owns one session; nothing here is process-global.
//! - Nothing is written to the slot until `commit`.

use crate::session::state::{Flash, SessionState};
use crate::session::store::{SessionKey, SessionResult, SessionStore};
use crate::store::collection::Collection;
use log::{debug, info};

/// Capabilities of the inbound request, decided by the request layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Caller is programmatic and wants a status signal instead of a redirect.
    pub wants_minimal_response: bool,
}

impl RequestContext {
    pub fn minimal() -> Self {
        Self {
            wants_minimal_response: true,
        }
    }
}

pub struct SessionContext<S: SessionStore> {
    store: S,
    key: SessionKey,
    state: SessionState,
    request: RequestContext,
}

impl<S: SessionStore> SessionContext<S> {
    /// Reads the session slot, starting an empty collection on first contact.
    pub fn load(store: S, key: SessionKey) -> SessionResult<Self> {
        let state = match store.get(&key)? {
            Some(payload) => SessionState::decode(&payload)?,
            None => {
                debug!("event=session_load module=session status=new");
                SessionState::default()
            }
        };
        info!(
            "event=session_load module=session status=ok list_count={}",
            state.collection.list_all().len()
        );

        Ok(Self {
            store,
            key,
            state,
            request: RequestContext::default(),
        })
    }

    pub fn with_request(mut self, request: RequestContext) -> Self {
        self.request = request;
        self
    }

    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    pub fn request(&self) -> RequestContext {
        self.request
    }

    pub fn collection(&self) -> &Collection {
        &self.state.collection
    }

    pub fn collection_mut(&mut self) -> &mut Collection {
        &mut self.state.collection
    }

    /// Replaces any pending flash.
    pub fn set_flash(&mut self, flash: Flash) {
        self.state.flash = Some(flash);
    }

    pub fn peek_flash(&self) -> Option<&Flash> {
        self.state.flash.as_ref()
    }

    /// Returns the pending flash and clears it, so it is shown once.
    pub fn take_flash(&mut self) -> Option<Flash> {
        self.state.flash.take()
    }

    /// Serializes current state into the session slot.
    pub fn commit(&self) -> SessionResult<()> {
        let payload = self.state.encode()?;
        self.store.set(&self.key, &payload)?;
        info!(
            "event=session_commit module=session status=ok list_count={} payload_bytes={}",
            self.state.collection.list_all().len(),
            payload.len()
        );
        Ok(())
    }
}
