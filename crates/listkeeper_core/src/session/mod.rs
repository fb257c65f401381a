//! Session boundary: the durable slot a collection lives in between requests.
//!
//! # Responsibility
//! - Define the `SessionStore` slot contract consumed by the core.
//! - Provide in-memory and SQLite slot implementations.
//! - Define the serialized session payload (collection + flash).

pub mod memory;
pub mod sqlite;
pub mod state;
pub mod store;
