//! Read-only rendering helpers for lists.

use crate::model::list::List;
use std::fmt::{Display, Formatter};

/// Completed vs. total item counts for one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListProgress {
    pub completed: usize,
    pub total: usize,
}

impl Display for ListProgress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.completed, self.total)
    }
}

pub fn progress(list: &List) -> ListProgress {
    ListProgress {
        completed: list.items().iter().filter(|item| item.is_completed()).count(),
        total: list.items().len(),
    }
}

/// CSS class hint for a list row; `None` while work remains.
pub fn list_class(list: &List) -> Option<&'static str> {
    list.is_complete().then_some("complete")
}
