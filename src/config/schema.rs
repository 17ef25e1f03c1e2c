//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Port used when no argument is given, or when the argument fails to parse.
pub const DEFAULT_PORT: u16 = 1848;

/// Depth of the OS accept queue.
pub const DEFAULT_BACKLOG: u32 = 3;

/// Root configuration for the greeter service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GreeterConfig {
    /// Listener configuration (port, backlog).
    pub listener: ListenerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// TCP port to bind. Port 0 requests an OS-assigned ephemeral port.
    pub port: u16,

    /// Accept-queue depth passed to listen(2).
    pub backlog: u32,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backlog: DEFAULT_BACKLOG,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Resolve a port argument from the command line.
///
/// A value that does not parse as a port is reported and replaced with
/// [`DEFAULT_PORT`], so a malformed argument never aborts startup.
pub fn parse_port_arg(arg: &str) -> u16 {
    match arg.parse() {
        Ok(port) => port,
        Err(_) => {
            tracing::warn!(
                argument = arg,
                fallback = DEFAULT_PORT,
                "Port argument did not parse, using default"
            );
            DEFAULT_PORT
        }
    }
}
