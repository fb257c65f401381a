//! Core domain logic for ListKeeper.
//! This crate is the single source of truth for list/item invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod session;
pub mod store;
pub mod view;

pub use config::TrackerConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::id::{next_id, IdAllocator, ItemId, ListId};
pub use model::item::Item;
pub use model::list::List;
pub use model::validation::{
    validate_item_name, validate_list_name, NameKind, NameValidationError,
};
pub use service::session_context::{RequestContext, SessionContext};
pub use service::tracker_service::{MinimalResponse, Outcome, Route, TrackerService};
pub use session::memory::MemorySessionStore;
pub use session::sqlite::SqliteSessionStore;
pub use session::state::{Flash, SessionState};
pub use session::store::{SessionError, SessionKey, SessionResult, SessionStore};
pub use store::collection::{Collection, StoreError, StoreResult};
pub use view::sort::{sorted_items, sorted_lists, Placed, PlacedItem, PlacedList};
pub use view::summary::{list_class, progress, ListProgress};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
