//! Structured messages exchanged between the display surface and the dispatcher.
//!
//! Inbound messages ([`ActionMessage`]) and outbound messages ([`OutboundMessage`])
//! are JSON objects discriminated by a `command` field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::short_url::opaque_id;
use crate::domain::entities::{PageView, Pagination, ShortUrlRecord};
use crate::error::ApiError;

/// A user-initiated request sent from the display surface.
///
/// Each message is handled to completion before the next one is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum ActionMessage {
    #[serde(rename_all = "camelCase")]
    GenerateUrl {
        #[serde(default)]
        long_url: String,
    },

    #[serde(rename_all = "camelCase")]
    EditUrl {
        #[serde(deserialize_with = "opaque_id")]
        id: String,
        #[serde(default)]
        new_short: String,
        #[serde(default)]
        long_url: String,
    },

    FetchUrls {
        #[serde(default)]
        page: Option<u32>,
    },

    /// The surface copied a short URL to the clipboard.
    NotifyCopySuccess {
        #[serde(default)]
        message: String,
    },

    OpenSettingsJson,
}

impl ActionMessage {
    const COMMANDS: [&'static str; 5] = [
        "generateUrl",
        "editUrl",
        "fetchUrls",
        "notifyCopySuccess",
        "openSettingsJson",
    ];

    /// Parses a raw inbound payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Protocol`] for unknown `command` tags and for payloads
    /// whose fields do not match the command.
    pub fn from_value(payload: Value) -> Result<Self, ApiError> {
        let command = payload
            .get("command")
            .and_then(Value::as_str)
            .map(str::to_owned);

        match command {
            Some(command) if Self::COMMANDS.contains(&command.as_str()) => {
                serde_json::from_value(payload).map_err(|e| {
                    ApiError::protocol(format!("Malformed `{command}` message: {e}"))
                })
            }
            Some(command) => Err(ApiError::protocol(format!(
                "Unknown command received: {command}"
            ))),
            None => Err(ApiError::protocol("Message has no `command` field")),
        }
    }

    /// The wire tag, for logging.
    pub fn command(&self) -> &'static str {
        match self {
            ActionMessage::GenerateUrl { .. } => "generateUrl",
            ActionMessage::EditUrl { .. } => "editUrl",
            ActionMessage::FetchUrls { .. } => "fetchUrls",
            ActionMessage::NotifyCopySuccess { .. } => "notifyCopySuccess",
            ActionMessage::OpenSettingsJson => "openSettingsJson",
        }
    }
}

/// A push update from the dispatcher to the display surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum OutboundMessage {
    UpdateList {
        urls: Vec<ShortUrlRecord>,
        pagination: Pagination,
    },

    #[serde(rename_all = "camelCase")]
    Notification { message: String, is_success: bool },
}

impl OutboundMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Notification {
            message: message.into(),
            is_success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Notification {
            message: message.into(),
            is_success: false,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            OutboundMessage::Notification {
                is_success: false,
                ..
            }
        )
    }
}

impl From<PageView> for OutboundMessage {
    fn from(view: PageView) -> Self {
        Self::UpdateList {
            urls: view.urls,
            pagination: view.pagination,
        }
    }
}
