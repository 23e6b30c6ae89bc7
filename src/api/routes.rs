//! Panel host API route configuration.

use crate::api::handlers::{message_handler, open_panel_handler, status_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Display surface channel routes.
///
/// # Endpoints
///
/// - `POST /panel`    - Open the panel (first page)
/// - `POST /messages` - Dispatch one inbound message
/// - `GET  /status`   - URL count status line
pub fn panel_routes() -> Router<AppState> {
    Router::new()
        .route("/panel", post(open_panel_handler))
        .route("/messages", post(message_handler))
        .route("/status", get(status_handler))
}
