//! Presentation ordering for lists and items.
//!
//! # Responsibility
//! - Yield incomplete entries first and complete entries last for display.
//!
//! # Invariants
//! - Relative order inside each group matches storage order.
//! - Storage is never reordered; each yielded entry carries its stable id and
//!   its position in the authoritative sequence.
//! - Iterators are lazy and recomputed on every call.

use crate::model::id::{ItemId, ListId};
use crate::model::item::Item;
use crate::model::list::List;

/// A borrowed entry paired with where it lives in authoritative storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed<'a, T, Id> {
    pub entry: &'a T,
    pub id: Id,
    /// Position in the authoritative sequence, not in the display order.
    pub index: usize,
}

pub type PlacedList<'a> = Placed<'a, List, ListId>;
pub type PlacedItem<'a> = Placed<'a, Item, ItemId>;

/// Lists ordered for display: incomplete first, then complete.
pub fn sorted_lists(lists: &[List]) -> impl Iterator<Item = PlacedList<'_>> + '_ {
    partitioned(lists, List::is_complete).map(|(index, list)| Placed {
        entry: list,
        id: list.id(),
        index,
    })
}

/// Items ordered for display: incomplete first, then completed.
pub fn sorted_items(items: &[Item]) -> impl Iterator<Item = PlacedItem<'_>> + '_ {
    partitioned(items, Item::is_completed).map(|(index, item)| Placed {
        entry: item,
        id: item.id(),
        index,
    })
}

fn partitioned<T>(
    entries: &[T],
    is_done: fn(&T) -> bool,
) -> impl Iterator<Item = (usize, &T)> + '_ {
    let pending = entries
        .iter()
        .enumerate()
        .filter(move |(_, entry)| !is_done(entry));
    let done = entries
        .iter()
        .enumerate()
        .filter(move |(_, entry)| is_done(entry));
    pending.chain(done)
}
