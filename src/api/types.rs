//! API response types.
//!
//! Successful plan responses serialize [`ProductionPlan`](crate::plan::ProductionPlan)
//! directly as a JSON array of `{"name", "p"}` objects.

use serde::Serialize;

use crate::error::PlanError;

/// Error response body for 4xx errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl From<&PlanError> for ErrorResponse {
    fn from(e: &PlanError) -> Self {
        Self {
            error: e.to_string(),
        }
    }
}

/// Liveness probe body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
