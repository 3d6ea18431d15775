//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject repeated signals in the listen filter
//! - Reject log levels that are not a bare level name
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ShutdownConfig → Result<(), Vec<ValidationError>>

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::ShutdownConfig;
use crate::lifecycle::Signal;
use crate::observability::logging::parse_level;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listen.signals contains {0} more than once")]
    DuplicateSignal(Signal),

    #[error("observability.log_level {0:?} is not a log level")]
    InvalidLogLevel(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ShutdownConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for signal in &config.listen.signals {
        if !seen.insert(*signal) {
            errors.push(ValidationError::DuplicateSignal(*signal));
        }
    }

    if parse_level(&config.observability.log_level).is_none() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
