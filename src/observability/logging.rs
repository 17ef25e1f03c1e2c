//! Structured logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging subsystem.
///
/// `default_level` applies to this crate's events when RUST_LOG is unset.
/// Panics if called twice; logging is set up once at startup.
pub fn init(default_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!("greeterd={}", default_level))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
