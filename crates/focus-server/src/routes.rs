use crate::state::AppState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use focus_analytics::aggregations;
use focus_core::error::InsightError;
use focus_core::normalize::normalize_sessions;
use focus_core::types::SessionRecord;
use serde::Deserialize;
use serde_json::{json, Value};

// ── Health ──────────────────────────────────────────────────────────────

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "focus insight service running",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// ── Insights ────────────────────────────────────────────────────────────

pub fn insight_routes() -> Router<AppState> {
    Router::new()
        .route("/predict_peak_hours", post(predict_peak_hours))
        .route("/energy_pattern", post(energy_pattern))
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    /// A missing `sessions` key is treated as an empty list.
    #[serde(default)]
    sessions: Vec<SessionRecord>,
}

async fn predict_peak_hours(
    Json(req): Json<AnalyzeRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    if req.sessions.is_empty() {
        return Ok(Json(json!({ "peak_hours": [], "message": "no sessions" })).into_response());
    }

    let table = normalize_sessions(&req.sessions).map_err(internal_error)?;

    match aggregations::peak_hours(&table) {
        Some(summary) => Ok(Json(summary).into_response()),
        None => Ok(Json(json!({ "peak_hours": [], "message": "no sessions" })).into_response()),
    }
}

async fn energy_pattern(
    Json(req): Json<AnalyzeRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    let table = normalize_sessions(&req.sessions).map_err(internal_error)?;

    match aggregations::energy_pattern(&table) {
        Some(pattern) => Ok(Json(pattern).into_response()),
        None => Ok(Json(json!({ "message": "no data" })).into_response()),
    }
}

/// Map any processing failure to the flat error contract: a 500 carrying
/// `{"error": <text>}`, with no per-cause status differentiation.
fn internal_error(err: InsightError) -> (StatusCode, Json<Value>) {
    tracing::warn!("request failed: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": err.to_string() })),
    )
}
