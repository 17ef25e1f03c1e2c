//! Dual-Stack TCP Greeter Service Library

pub mod config;
pub mod greeter;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::GreeterConfig;
pub use greeter::GreeterServer;
pub use lifecycle::Shutdown;
