//! Tracing and observability module.
//!
//! Provides logging and span export for the catalog service.

/// Tracer configuration and initialization.
pub mod tracer;
