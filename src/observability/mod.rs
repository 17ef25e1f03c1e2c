//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging through tracing; events carry fields, not prose
//! - RUST_LOG overrides the configured level
//! - No metrics endpoint: the service's observable surface is its log stream

pub mod logging;
