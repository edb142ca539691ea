//! REST API for production plans.
//!
//! Endpoints:
//! - `POST /productionplan` computes a plan from a JSON payload
//! - `GET /health` liveness probe

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

pub use types::ErrorResponse;

/// Immutable application state shared across all request handlers.
///
/// Built once at startup and wrapped in `Arc`; no locks needed since every
/// request computes its plan from its own payload.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Decimal places kept in reported production values.
    pub decimals: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self { decimals: 1 }
    }
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/productionplan", post(handlers::create_production_plan))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Binds to the given address and serves the API until the process stops.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "production plan API listening");
    axum::serve(listener, app).await
}
