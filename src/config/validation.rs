//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (backlog holds at least one connection)
//! - Check the log level names a real level
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GreeterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::GreeterConfig;

/// Log levels accepted by the observability section.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic violation in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The accept queue must hold at least one pending connection.
    ZeroBacklog,
    /// Log level is not one of the recognized names.
    UnknownLogLevel(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::ZeroBacklog => {
                write!(f, "listener.backlog must be at least 1")
            }
            ValidationError::UnknownLogLevel(level) => {
                write!(
                    f,
                    "unknown log level '{}', expected one of {:?}",
                    level, LOG_LEVELS
                )
            }
        }
    }
}

/// Validate a configuration, collecting all violations.
pub fn validate_config(config: &GreeterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.backlog == 0 {
        errors.push(ValidationError::ZeroBacklog);
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&GreeterConfig::default()).is_ok());
    }

    #[test]
    fn zero_backlog_is_rejected() {
        let mut config = GreeterConfig::default();
        config.listener.backlog = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::ZeroBacklog]);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let mut config = GreeterConfig::default();
        config.observability.log_level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnknownLogLevel("loud".to_string())]
        );
    }

    #[test]
    fn all_violations_are_reported() {
        let mut config = GreeterConfig::default();
        config.listener.backlog = 0;
        config.observability.log_level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
