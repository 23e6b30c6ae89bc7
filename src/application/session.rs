//! A dispatcher paired with the outbox its surface writes to.

use serde_json::Value;
use tracing::debug;

use crate::application::dispatcher::ActionDispatcher;
use crate::domain::messages::OutboundMessage;
use crate::domain::ports::ShortUrlApi;
use crate::infrastructure::surface::Outbox;

/// Runs actions and collects exactly the messages each one produced.
///
/// Hosts share a session behind a mutex; an action's messages are drained
/// before the next action starts.
pub struct PanelSession<A: ShortUrlApi> {
    dispatcher: ActionDispatcher<A>,
    outbox: Outbox,
}

impl<A: ShortUrlApi> PanelSession<A> {
    pub fn new(dispatcher: ActionDispatcher<A>, outbox: Outbox) -> Self {
        Self { dispatcher, outbox }
    }

    /// Initial display: first page, or a failure notification.
    pub async fn open(&mut self) -> Vec<OutboundMessage> {
        if let Err(e) = self.dispatcher.open().await {
            debug!(kind = ?e.kind(), "Panel opened without a list");
        }
        self.outbox.drain()
    }

    pub async fn handle(&mut self, payload: Value) -> Vec<OutboundMessage> {
        self.dispatcher.dispatch_raw(payload).await;
        self.outbox.drain()
    }
}
