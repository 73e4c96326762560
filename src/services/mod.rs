//! Long-running host services.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate is synchronous; services wrap it in Tokio tasks so the
//! rest of the process can talk to it over channels.

pub mod controller;
