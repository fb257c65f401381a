//! Request-scoped use-case services.
//!
//! # Responsibility
//! - Bind one session's state to the request that drives it.
//! - Keep request layers (CLI, HTTP hosts) decoupled from store details.

pub mod session_context;
pub mod tracker_service;
