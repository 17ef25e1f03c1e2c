//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     trigger() → serve loop observes signal between iterations → exit
//!
//! Signals (signals.rs):
//!     SIGTERM / ctrl-c → Shutdown::trigger
//! ```
//!
//! # Design Decisions
//! - The stop signal is level-triggered: late subscribers still observe it
//! - No drain phase: the loop never holds a connection across iterations

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, ShutdownSignal};
