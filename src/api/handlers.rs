//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use tracing::{info, warn};

use super::AppState;
use super::types::{ErrorResponse, HealthResponse};
use crate::plan::{self, Payload, PlanSummary, ProductionPlan};

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Computes the production plan for the posted payload.
///
/// `POST /productionplan` → 200 + `[{"name", "p"}, ...]` JSON
/// Malformed JSON, missing fields, unknown plant type → 400 + `ErrorResponse`
/// Wind out of range, duplicate plant names → 400 + `ErrorResponse`
/// Missing `Content-Type: application/json` → 415 + `ErrorResponse`
pub async fn create_production_plan(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Payload>, JsonRejection>,
) -> Result<Json<ProductionPlan>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        let status = if rejection.status() == StatusCode::UNSUPPORTED_MEDIA_TYPE {
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        } else {
            StatusCode::BAD_REQUEST
        };
        let error = rejection.body_text();
        warn!(%status, %error, "rejected production plan request");
        (status, Json(ErrorResponse { error }))
    })?;

    let plan = plan::solve(&payload).map_err(|e| {
        warn!(error = %e, "rejected production plan request");
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::from(&e)))
    })?;

    let summary = PlanSummary::from_plan(&payload, &plan);
    info!(
        units = plan.len(),
        load_mw = summary.load_mw,
        total_mw = summary.total_mw,
        imbalance_mw = summary.imbalance_mw,
        hourly_cost = summary.hourly_cost,
        "production plan computed"
    );

    Ok(Json(plan.rounded(state.decimals)))
}

/// `GET /health` → 200 + `{"status":"ok"}`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
