//! Stable identifiers and allocation for lists and items.
//!
//! # Responsibility
//! - Provide typed ids so list and item ids cannot be swapped by mistake.
//! - Allocate ids that are unique within their owning scope.
//!
//! # Invariants
//! - Every allocated id is `>= 1`.
//! - `IdAllocator` never hands out the same value twice, even after the
//!   entity holding the current maximum id is deleted.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifier of a list, unique within one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(pub u64);

/// Identifier of an item, unique within its owning list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl Display for ListId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns `max(existing) + 1`, or `1` when `existing` is empty.
///
/// The result is never currently in use, but a deleted maximum id can be
/// handed out again. Store paths allocate through [`IdAllocator`] instead.
/// `None` when the maximum is `u64::MAX`.
pub fn next_id(existing: impl IntoIterator<Item = u64>) -> Option<u64> {
    existing.into_iter().max().unwrap_or(0).checked_add(1)
}

/// Monotonic high-water id counter stored alongside the entities it numbers.
///
/// The counter is always `>= 1`; `u64::MAX` is never handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl TryFrom<u64> for IdAllocator {
    type Error = String;

    fn try_from(next: u64) -> Result<Self, Self::Error> {
        if next == 0 {
            return Err("id counter must be >= 1".to_string());
        }
        Ok(Self { next })
    }
}

impl From<IdAllocator> for u64 {
    fn from(allocator: IdAllocator) -> Self {
        allocator.next
    }
}

impl IdAllocator {
    /// Starts the counter just past the highest id in `existing`.
    pub fn seeded(existing: impl IntoIterator<Item = u64>) -> Option<Self> {
        next_id(existing).map(|next| Self { next })
    }

    /// Returns the value the next `allocate` call will produce.
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Hands out the current counter value and advances it.
    ///
    /// `None` once the id space is used up; the counter is left unchanged.
    pub fn allocate(&mut self) -> Option<u64> {
        let following = self.next.checked_add(1)?;
        let id = self.next;
        self.next = following;
        Some(id)
    }

    /// Raises the counter past `id` if it is not already beyond it.
    ///
    /// `None` when `id` is `u64::MAX` and no counter value can follow it.
    pub fn observe(&mut self, id: u64) -> Option<()> {
        if id >= self.next {
            self.next = id.checked_add(1)?;
        }
        Some(())
    }
}
