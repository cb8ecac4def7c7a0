//! cardbox HTTP server: one upload endpoint, health, and API docs.
//!
//! Exposed as a library so integration tests can build the router with an
//! in-process provider double instead of a live model API.

pub mod api;
pub mod router;
pub mod state;
