//! Author listing module.
//!
//! Provides the read side of the author catalog:
//! - HTTP-facing adapter that answers with the author list
//! - Query manager that formats authors for display
//! - Repository abstraction for data persistence

/// Author list adapter.
pub mod adapter;

/// Author query manager for data retrieval and formatting.
pub mod query_manager;

/// Author repository abstraction and implementations.
pub mod repository;

/// Response payloads and sinks.
pub mod response;
