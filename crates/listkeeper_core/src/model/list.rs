//! List domain model.
//!
//! # Responsibility
//! - Own the ordered items of one named list.
//! - Carry the item id allocator so ids survive session round-trips.
//!
//! # Invariants
//! - `items` keeps insertion order; presentation order lives in `view::sort`.
//! - Item ids are unique within the list and never reused.
//! - A list is complete iff it has at least one item and all are completed.
//!
//! # See also
//! - `store::collection` for the mutation entry points.

use crate::model::id::{IdAllocator, ItemId, ListId};
use crate::model::item::Item;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Named, ordered collection of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ListRecord")]
pub struct List {
    id: ListId,
    name: String,
    /// Serialized as `todos` to stay compatible with stored sessions.
    #[serde(rename = "todos")]
    items: Vec<Item>,
    next_item_id: IdAllocator,
}

/// Wire shape accepted when loading a list; allocator state is optional.
#[derive(Deserialize)]
struct ListRecord {
    id: ListId,
    name: String,
    #[serde(default)]
    todos: Vec<Item>,
    #[serde(default)]
    next_item_id: Option<IdAllocator>,
}

impl TryFrom<ListRecord> for List {
    type Error = String;

    fn try_from(record: ListRecord) -> Result<Self, Self::Error> {
        if record.id.0 == 0 {
            return Err("list id must be >= 1".to_string());
        }

        let mut seen = HashSet::with_capacity(record.todos.len());
        for item in &record.todos {
            if item.id().0 == 0 {
                return Err(format!("item id must be >= 1 in list {}", record.id));
            }
            if !seen.insert(item.id()) {
                return Err(format!(
                    "duplicate item id {} in list {}",
                    item.id(),
                    record.id
                ));
            }
        }

        let out_of_range = || format!("item id out of range in list {}", record.id);
        let mut next_item_id = match record.next_item_id {
            Some(allocator) => allocator,
            None => IdAllocator::seeded(record.todos.iter().map(|item| item.id().0))
                .ok_or_else(out_of_range)?,
        };
        for item in &record.todos {
            next_item_id.observe(item.id().0).ok_or_else(out_of_range)?;
        }

        Ok(Self {
            id: record.id,
            name: record.name,
            items: record.todos,
            next_item_id,
        })
    }
}

impl List {
    pub(crate) fn new(id: ListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
            next_item_id: IdAllocator::default(),
        }
    }

    pub fn id(&self) -> ListId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, item_id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == item_id)
    }

    /// Non-empty and every item completed.
    pub fn is_complete(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(Item::is_completed)
    }

    pub(crate) fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// `None` once the list's item id space is used up.
    pub(crate) fn push_item(&mut self, name: impl Into<String>) -> Option<ItemId> {
        let id = ItemId(self.next_item_id.allocate()?);
        self.items.push(Item::new(id, name));
        Some(id)
    }

    pub(crate) fn item_mut(&mut self, item_id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == item_id)
    }

    pub(crate) fn remove_item(&mut self, item_id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != item_id);
        self.items.len() != before
    }

    pub(crate) fn complete_all(&mut self) {
        for item in &mut self.items {
            item.set_completed(true);
        }
    }
}
