//! Greeter subsystem.
//!
//! # Data Flow
//! ```text
//! DualStackListener::accept
//!     → server.rs (sequential serve loop)
//!     → write GREETING to the client
//!     → close the connection
//!
//! Connection states:
//!     Accepted → Greeted → Closed
//! ```

pub mod server;

pub use server::{GreeterServer, GREETING};
