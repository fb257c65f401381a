//! Item domain model.
//!
//! # Responsibility
//! - Define the unit of work tracked inside a list.
//!
//! # Invariants
//! - `id` is unique within the owning list and never changes.
//! - New items start with `completed = false`.
//! - Only the collection store flips `completed`.

use crate::model::id::ItemId;
use serde::{Deserialize, Serialize};

/// Named unit of work with a completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    completed: bool,
}

impl Item {
    pub(crate) fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
