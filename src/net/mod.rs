//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection (IPv4 or IPv6)
//!     → listener.rs (dual-stack bind, accept)
//!     → connection.rs (per-connection identifiers for log correlation)
//!     → Hand off to greeter layer
//! ```
//!
//! # Design Decisions
//! - One IPv6 socket with IPV6_V6ONLY cleared serves both address families
//! - Socket options are applied before bind; the order is load-bearing
//! - Accept errors never tear down the listener

pub mod connection;
pub mod listener;

pub use connection::ConnectionId;
pub use listener::{DualStackListener, ListenerError};
