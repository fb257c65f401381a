//! List tracker use-case service.
//!
//! # Responsibility
//! - Normalize raw request parameters (trim names, parse ids and flags).
//! - Drive one collection store operation per call.
//! - Translate typed store results into flash messages and transport-agnostic
//!   outcomes the request layer maps onto its own responses.
//!
//! # Invariants
//! - Names are trimmed before validation.
//! - Every call sets at most one flash value.
//! - Deletes from minimal-response requests leave the flash untouched.

use crate::model::id::{ItemId, ListId};
use crate::service::session_context::SessionContext;
use crate::session::state::Flash;
use crate::session::store::SessionStore;
use crate::store::collection::StoreError;
use log::warn;
use std::fmt::{Display, Formatter};

pub const MSG_LIST_CREATED: &str = "The list has been created.";
pub const MSG_LIST_UPDATED: &str = "The list has been updated.";
pub const MSG_LIST_DELETED: &str = "The list has been deleted.";
pub const MSG_LIST_NOT_FOUND: &str = "The specified list was not found.";
pub const MSG_ITEM_ADDED: &str = "The item was added.";
pub const MSG_ITEM_DELETED: &str = "The item has been deleted.";
pub const MSG_ITEM_UPDATED: &str = "The item has been updated.";
pub const MSG_ITEM_NOT_FOUND: &str = "The specified item was not found.";
pub const MSG_ALL_COMPLETED: &str = "All items have been completed.";

/// Navigable views, rendered as request-layer paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Lists,
    NewList,
    List(ListId),
    EditList(ListId),
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lists => write!(f, "/lists"),
            Self::NewList => write!(f, "/lists/new"),
            Self::List(id) => write!(f, "/lists/{id}"),
            Self::EditList(id) => write!(f, "/lists/{id}/edit"),
        }
    }
}

/// Body-less reply for programmatic callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinimalResponse {
    /// Nothing to return (e.g. HTTP 204).
    NoContent,
    /// Caller should navigate to this location on its own.
    Location(Route),
}

/// What the request layer should do after a use-case call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Navigate to the route; pending flash is shown there.
    Redirect(Route),
    /// Render the route again in place; the error flash explains why.
    Rerender(Route),
    /// Programmatic caller asked for a minimal reply.
    Minimal(MinimalResponse),
}

/// Parses a positive integer id from a raw path segment.
pub fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|id| *id > 0)
}

/// Only the literal `true` marks an item completed.
pub fn parse_completed(raw: &str) -> bool {
    raw.trim() == "true"
}

/// Use-case facade over one request's session context.
pub struct TrackerService<'ctx, S: SessionStore> {
    session: &'ctx mut SessionContext<S>,
}

impl<'ctx, S: SessionStore> TrackerService<'ctx, S> {
    pub fn new(session: &'ctx mut SessionContext<S>) -> Self {
        Self { session }
    }

    pub fn create_list(&mut self, raw_name: &str) -> Outcome {
        match self.session.collection_mut().create_list(raw_name.trim()) {
            Ok(_) => self.redirect_with(MSG_LIST_CREATED, Route::Lists),
            Err(err) => self.failed(&err, Route::NewList),
        }
    }

    pub fn rename_list(&mut self, list_id: ListId, raw_name: &str) -> Outcome {
        match self
            .session
            .collection_mut()
            .rename_list(list_id, raw_name.trim())
        {
            Ok(()) => self.redirect_with(MSG_LIST_UPDATED, Route::Lists),
            Err(err) => self.failed(&err, Route::EditList(list_id)),
        }
    }

    /// Idempotent: deleting a missing list still reports success.
    pub fn delete_list(&mut self, list_id: ListId) -> Outcome {
        self.session.collection_mut().delete_list(list_id);
        if self.session.request().wants_minimal_response {
            return Outcome::Minimal(MinimalResponse::Location(Route::Lists));
        }
        self.redirect_with(MSG_LIST_DELETED, Route::Lists)
    }

    pub fn add_item(&mut self, list_id: ListId, raw_name: &str) -> Outcome {
        match self
            .session
            .collection_mut()
            .add_item(list_id, raw_name.trim())
        {
            Ok(_) => self.redirect_with(MSG_ITEM_ADDED, Route::List(list_id)),
            Err(err) => self.failed(&err, Route::List(list_id)),
        }
    }

    /// A missing item is a silent no-op; a missing list is reported.
    pub fn delete_item(&mut self, list_id: ListId, item_id: ItemId) -> Outcome {
        if let Err(err) = self.session.collection().get_list(list_id) {
            return self.failed(&err, Route::List(list_id));
        }
        self.session.collection_mut().delete_item(list_id, item_id);
        if self.session.request().wants_minimal_response {
            return Outcome::Minimal(MinimalResponse::NoContent);
        }
        self.redirect_with(MSG_ITEM_DELETED, Route::List(list_id))
    }

    pub fn toggle_item(
        &mut self,
        list_id: ListId,
        item_id: ItemId,
        raw_completed: &str,
    ) -> Outcome {
        let completed = parse_completed(raw_completed);
        match self
            .session
            .collection_mut()
            .toggle_item(list_id, item_id, completed)
        {
            Ok(()) => self.redirect_with(MSG_ITEM_UPDATED, Route::List(list_id)),
            Err(err) => self.failed(&err, Route::List(list_id)),
        }
    }

    pub fn complete_all(&mut self, list_id: ListId) -> Outcome {
        match self.session.collection_mut().complete_all(list_id) {
            Ok(()) => self.redirect_with(MSG_ALL_COMPLETED, Route::List(list_id)),
            Err(err) => self.failed(&err, Route::List(list_id)),
        }
    }

    fn redirect_with(&mut self, message: &str, route: Route) -> Outcome {
        self.session.set_flash(Flash::success(message));
        Outcome::Redirect(route)
    }

    /// Misses redirect away with a fixed message; rejected input re-renders `form`.
    fn failed(&mut self, err: &StoreError, form: Route) -> Outcome {
        match err {
            StoreError::ListNotFound(_) => {
                warn!("event=lookup module=service status=not_found error={err}");
                self.session.set_flash(Flash::error(MSG_LIST_NOT_FOUND));
                Outcome::Redirect(Route::Lists)
            }
            StoreError::ItemNotFound { list_id, .. } => {
                warn!("event=lookup module=service status=not_found error={err}");
                self.session.set_flash(Flash::error(MSG_ITEM_NOT_FOUND));
                Outcome::Redirect(Route::List(*list_id))
            }
            StoreError::Validation(_) | StoreError::IdsExhausted => {
                self.session.set_flash(Flash::error(err.to_string()));
                Outcome::Rerender(form)
            }
        }
    }
}
