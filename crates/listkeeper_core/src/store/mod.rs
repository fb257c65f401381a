//! In-memory state owners.
//!
//! # Responsibility
//! - Hold the authoritative collection for one session and enforce its
//!   invariants on every mutation.
//!
//! # See also
//! - `session` for how the collection is loaded and written back.

pub mod collection;
