//! DTOs for the panel message endpoints.

use serde::Serialize;

use crate::domain::messages::OutboundMessage;

/// Outbound messages produced by one request, in posting order.
#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<OutboundMessage>,
}

impl From<Vec<OutboundMessage>> for MessagesResponse {
    fn from(messages: Vec<OutboundMessage>) -> Self {
        Self { messages }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub tooltip: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
