//! Configuration error types
//!
//! The similarity functions are total over any pair of strings and never
//! fail. Errors only arise when building a matcher from caller-supplied
//! configuration.

use thiserror::Error;

/// Errors that can occur while validating matcher configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Layout name is not one of the supported keyboard layouts
    #[error("unknown keyboard layout: {0}")]
    UnknownLayout(String),

    /// Fast matcher threshold outside [0.0, 1.0]
    #[error("invalid match threshold {0}: must be within 0.0..=1.0")]
    InvalidThreshold(f64),

    /// Ranking cutoff outside [0.0, 1.0]
    #[error("invalid minimum score {0}: must be within 0.0..=1.0")]
    InvalidMinScore(f64),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
