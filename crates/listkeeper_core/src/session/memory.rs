//! Process-local session slots.
//!
//! Used by tests and by hosts that keep sessions in memory. Contents vanish
//! with the value.

use crate::session::store::{SessionKey, SessionResult, SessionStore};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slots: RefCell<HashMap<SessionKey, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &SessionKey) -> SessionResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &SessionKey, value: &str) -> SessionResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.clone(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &SessionKey) -> SessionResult<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}
