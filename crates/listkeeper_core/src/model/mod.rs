//! Domain model for session-scoped lists and items.
//!
//! # Responsibility
//! - Define the list/item records and their typed identifiers.
//! - Host the pure name validation rules.
//!
//! # Invariants
//! - Entities are addressed by stable allocated ids, never by position.
//! - Ids are never reused inside their scope.

pub mod id;
pub mod item;
pub mod list;
pub mod validation;
