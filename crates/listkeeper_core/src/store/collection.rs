//! Session collection store.
//!
//! # Responsibility
//! - Own the lists of one session and every create/update/delete on them.
//! - Report misses and rejected names as typed results.
//!
//! # Invariants
//! - Validation runs before mutation; a failed call leaves state untouched.
//! - List ids are allocated from a stored counter and never reused.
//! - The store never navigates or formats responses.

use crate::model::id::{IdAllocator, ItemId, ListId};
use crate::model::list::List;
use crate::model::validation::{validate_item_name, validate_list_name, NameValidationError};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Typed failure of a collection store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Candidate name was rejected; collection unchanged.
    Validation(NameValidationError),
    /// No list with this id in the collection.
    ListNotFound(ListId),
    /// The list exists but holds no item with this id.
    ItemNotFound { list_id: ListId, item_id: ItemId },
    /// The id counter has no values left; collection unchanged.
    IdsExhausted,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::ListNotFound(id) => write!(f, "list not found: {id}"),
            Self::ItemNotFound { list_id, item_id } => {
                write!(f, "item not found: {item_id} in list {list_id}")
            }
            Self::IdsExhausted => write!(f, "no ids left to allocate"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::ListNotFound(_) | Self::ItemNotFound { .. } | Self::IdsExhausted => None,
        }
    }
}

impl From<NameValidationError> for StoreError {
    fn from(value: NameValidationError) -> Self {
        Self::Validation(value)
    }
}

/// All lists belonging to one session, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "CollectionRecord")]
pub struct Collection {
    lists: Vec<List>,
    next_list_id: IdAllocator,
}

#[derive(Deserialize)]
struct CollectionRecord {
    #[serde(default)]
    lists: Vec<List>,
    #[serde(default)]
    next_list_id: Option<IdAllocator>,
}

impl TryFrom<CollectionRecord> for Collection {
    type Error = String;

    fn try_from(record: CollectionRecord) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(record.lists.len());
        for list in &record.lists {
            if !seen.insert(list.id()) {
                return Err(format!("duplicate list id {}", list.id()));
            }
        }

        let out_of_range = || "list id out of range".to_string();
        let mut next_list_id = match record.next_list_id {
            Some(allocator) => allocator,
            None => IdAllocator::seeded(record.lists.iter().map(|list| list.id().0))
                .ok_or_else(out_of_range)?,
        };
        for list in &record.lists {
            next_list_id.observe(list.id().0).ok_or_else(out_of_range)?;
        }

        Ok(Self {
            lists: record.lists,
            next_list_id,
        })
    }
}

impl Collection {
    /// Creates an empty collection for a session seen for the first time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists in authoritative (insertion) order.
    pub fn list_all(&self) -> &[List] {
        &self.lists
    }

    pub fn list_names(&self) -> impl Iterator<Item = &str> {
        self.lists.iter().map(List::name)
    }

    pub fn get_list(&self, list_id: ListId) -> StoreResult<&List> {
        self.lists
            .iter()
            .find(|list| list.id() == list_id)
            .ok_or(StoreError::ListNotFound(list_id))
    }

    /// Validates `name` against every existing list and appends a new empty list.
    pub fn create_list(&mut self, name: &str) -> StoreResult<ListId> {
        validate_list_name(name, self.list_names())?;

        let id = ListId(
            self.next_list_id
                .allocate()
                .ok_or(StoreError::IdsExhausted)?,
        );
        self.lists.push(List::new(id, name));
        info!("event=list_create module=store status=ok list_id={id}");
        Ok(id)
    }

    /// Renames a list; the list's own current name does not count as a duplicate.
    pub fn rename_list(&mut self, list_id: ListId, new_name: &str) -> StoreResult<()> {
        self.get_list(list_id)?;
        validate_list_name(
            new_name,
            self.lists
                .iter()
                .filter(|list| list.id() != list_id)
                .map(List::name),
        )?;

        self.list_mut(list_id)?.rename(new_name);
        info!("event=list_rename module=store status=ok list_id={list_id}");
        Ok(())
    }

    /// Removes the list if present. Returns whether anything was removed.
    pub fn delete_list(&mut self, list_id: ListId) -> bool {
        let before = self.lists.len();
        self.lists.retain(|list| list.id() != list_id);
        let removed = self.lists.len() != before;
        if removed {
            info!("event=list_delete module=store status=ok list_id={list_id}");
        } else {
            debug!("event=list_delete module=store status=noop list_id={list_id}");
        }
        removed
    }

    pub fn add_item(&mut self, list_id: ListId, name: &str) -> StoreResult<ItemId> {
        let list = self.list_mut(list_id)?;
        validate_item_name(name)?;

        let item_id = list.push_item(name).ok_or(StoreError::IdsExhausted)?;
        info!("event=item_create module=store status=ok list_id={list_id} item_id={item_id}");
        Ok(item_id)
    }

    /// Removes the item if both list and item exist. Returns whether anything was removed.
    pub fn delete_item(&mut self, list_id: ListId, item_id: ItemId) -> bool {
        let removed = self
            .list_mut(list_id)
            .map(|list| list.remove_item(item_id))
            .unwrap_or(false);
        if removed {
            info!("event=item_delete module=store status=ok list_id={list_id} item_id={item_id}");
        } else {
            debug!(
                "event=item_delete module=store status=noop list_id={list_id} item_id={item_id}"
            );
        }
        removed
    }

    /// Sets the item's completion flag to exactly `completed`.
    pub fn toggle_item(
        &mut self,
        list_id: ListId,
        item_id: ItemId,
        completed: bool,
    ) -> StoreResult<()> {
        let item = self
            .list_mut(list_id)?
            .item_mut(item_id)
            .ok_or(StoreError::ItemNotFound { list_id, item_id })?;
        item.set_completed(completed);
        info!(
            "event=item_toggle module=store status=ok list_id={list_id} item_id={item_id} completed={completed}"
        );
        Ok(())
    }

    pub fn complete_all(&mut self, list_id: ListId) -> StoreResult<()> {
        let list = self.list_mut(list_id)?;
        list.complete_all();
        info!(
            "event=list_complete_all module=store status=ok list_id={list_id} item_count={}",
            list.items().len()
        );
        Ok(())
    }

    fn list_mut(&mut self, list_id: ListId) -> StoreResult<&mut List> {
        self.lists
            .iter_mut()
            .find(|list| list.id() == list_id)
            .ok_or(StoreError::ListNotFound(list_id))
    }
}
