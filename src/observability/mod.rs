//! Observability subsystem for neodb
//!
//! Provides:
//! - Typed lifecycle events
//! - A structured logging facade over `tracing`
//! - Subscriber installation for the binary
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on linking or querying
//! 3. Logs go to stderr so result output on stdout stays clean
//!
//! # Usage
//!
//! ```ignore
//! use neodb::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::DatabaseLinked, &[("linked", "42")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

use std::fmt;

use tracing_subscriber::EnvFilter;

/// Levels accepted by `init_logging`
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Observability error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservabilityErrorCode {
    /// Unknown log level
    NeodbLogLevelInvalid,
    /// Subscriber could not be installed
    NeodbLogInitFailed,
}

impl ObservabilityErrorCode {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ObservabilityErrorCode::NeodbLogLevelInvalid => "NEODB_LOG_LEVEL_INVALID",
            ObservabilityErrorCode::NeodbLogInitFailed => "NEODB_LOG_INIT_FAILED",
        }
    }
}

impl fmt::Display for ObservabilityErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Observability error
///
/// Observability failure never aborts a query; the binary reports it and
/// carries on without logs.
#[derive(Debug)]
pub struct ObservabilityError {
    code: ObservabilityErrorCode,
    message: String,
}

impl ObservabilityError {
    /// Invalid level string
    pub fn invalid_level(level: &str) -> Self {
        Self {
            code: ObservabilityErrorCode::NeodbLogLevelInvalid,
            message: format!(
                "Invalid log level '{}'. Expected one of: {}",
                level,
                LOG_LEVELS.join(", ")
            ),
        }
    }

    /// Subscriber installation failed
    pub fn init_failed(reason: impl Into<String>) -> Self {
        Self {
            code: ObservabilityErrorCode::NeodbLogInitFailed,
            message: reason.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ObservabilityErrorCode {
        self.code
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ObservabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ObservabilityError {}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Checks a level name against `LOG_LEVELS`.
pub fn validate_level(level: &str) -> ObservabilityResult<()> {
    if LOG_LEVELS.contains(&level) {
        Ok(())
    } else {
        Err(ObservabilityError::invalid_level(level))
    }
}

/// Installs the global stderr subscriber.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init_logging(level: &str) -> ObservabilityResult<()> {
    validate_level(level)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| ObservabilityError::init_failed(e.to_string()))
}

fn severity_for(event: Event) -> Severity {
    if event.is_failure() {
        Severity::Error
    } else if event.is_warning() {
        Severity::Warn
    } else if matches!(event, Event::LookupHit | Event::LookupMiss) {
        Severity::Debug
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_level() {
        assert!(validate_level("info").is_ok());
        assert!(validate_level("off").is_ok());

        let err = validate_level("loud").unwrap_err();
        assert_eq!(err.code(), ObservabilityErrorCode::NeodbLogLevelInvalid);
        assert!(err.to_string().contains("NEODB_LOG_LEVEL_INVALID"));
        assert!(err.message().contains("loud"));
    }

    #[test]
    fn test_event_severity() {
        assert_eq!(severity_for(Event::LoadFailed), Severity::Error);
        assert_eq!(severity_for(Event::QueryRejected), Severity::Warn);
        assert_eq!(severity_for(Event::DatabaseLinked), Severity::Info);
        assert_eq!(severity_for(Event::LookupMiss), Severity::Debug);
    }

    #[test]
    fn test_log_event() {
        log_event_with_fields(Event::DatabaseLinked, &[("linked", "3"), ("orphaned", "0")]);
    }
}
