//! Error types for request validation and service configuration.

use thiserror::Error;

/// A request rejected before it reaches the allocator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Wind availability outside `[0, 100]`.
    #[error("fuels.wind(%) must be in [0, 100], got {0}")]
    WindOutOfRange(f64),

    /// A numeric field is NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Dotted path of the offending field.
        field: String,
    },

    /// Two power plants share a name.
    #[error("duplicate power plant name \"{0}\"")]
    DuplicateName(String),
}

/// Configuration error with field path and constraint description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"server.port"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
