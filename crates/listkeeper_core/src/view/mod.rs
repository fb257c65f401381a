//! Presentation helpers consumed by the request layer.
//!
//! # Responsibility
//! - Derive display order and summary values from collection state.
//!
//! # Invariants
//! - Nothing in this module mutates a list or item.

pub mod sort;
pub mod summary;
