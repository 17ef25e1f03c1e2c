//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GreeterConfig (validated, immutable)
//!
//! CLI port argument (optional)
//!     → schema.rs parse_port_arg (fallback policy)
//!     → overrides listener.port
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::GreeterConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
