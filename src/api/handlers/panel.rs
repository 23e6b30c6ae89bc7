//! Handlers for the display surface message channel.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;
use tracing::warn;

use crate::api::dto::messages::MessagesResponse;
use crate::domain::messages::OutboundMessage;
use crate::state::AppState;

pub const INVALID_JSON_TEXT: &str = "Message is not valid JSON.";
pub const NOT_JSON_CONTENT_TEXT: &str = "Message must be sent as application/json.";

/// Opens the panel and returns its first page.
///
/// # Endpoint
///
/// `POST /api/panel`
///
/// # Response
///
/// ```json
/// {
///   "messages": [
///     {
///       "command": "updateList",
///       "urls": [{ "id": "1", "long_url": "https://example.com", "short": "ex" }],
///       "pagination": { "currentPage": 1, "totalPages": 1 }
///     }
///   ]
/// }
/// ```
///
/// A failed refresh yields a single `notification` with `isSuccess: false`.
pub async fn open_panel_handler(State(state): State<AppState>) -> Json<MessagesResponse> {
    let mut session = state.session.lock().await;
    Json(session.open().await.into())
}

/// Dispatches one inbound message and returns what it produced.
///
/// # Endpoint
///
/// `POST /api/messages`
///
/// # Request Body
///
/// ```json
/// { "command": "editUrl", "id": "17", "newShort": "docs", "longUrl": "https://docs.rs" }
/// ```
///
/// Supported commands: `generateUrl`, `editUrl`, `fetchUrls`,
/// `notifyCopySuccess`, `openSettingsJson`.
///
/// # Errors
///
/// None at the HTTP level. Unknown commands and malformed bodies come back
/// as a failure `notification`. Bodies not sent as `application/json` are
/// refused the same way and nothing is dispatched.
pub async fn message_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Json<MessagesResponse> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected inbound message body");
            return Json(vec![OutboundMessage::failure(rejection_text(&rejection))].into());
        }
    };

    let mut session = state.session.lock().await;
    Json(session.handle(payload).await.into())
}

fn rejection_text(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => NOT_JSON_CONTENT_TEXT,
        _ => INVALID_JSON_TEXT,
    }
}
