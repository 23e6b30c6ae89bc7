//! Handlers for status and health endpoints.

use axum::{Json, extract::State};

use crate::api::dto::messages::{HealthResponse, StatusResponse};
use crate::application::services::url_count_status;
use crate::state::AppState;

/// Returns the URL count status line.
///
/// # Endpoint
///
/// `GET /api/status`
///
/// # Response
///
/// ```json
/// { "tooltip": "Number of URLs created: 42" }
/// ```
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let tooltip = url_count_status(state.api.as_ref(), state.store.as_ref()).await;
    Json(StatusResponse { tooltip })
}

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
