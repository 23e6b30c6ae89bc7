//! Display surface backed by an in-process channel.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

use crate::domain::messages::OutboundMessage;
use crate::domain::ports::DisplaySurface;

/// Forwards outbound messages to an [`Outbox`] that the host drains.
#[derive(Debug, Clone)]
pub struct ChannelSurface {
    tx: UnboundedSender<OutboundMessage>,
}

/// Receiving half of a [`ChannelSurface`].
#[derive(Debug)]
pub struct Outbox {
    rx: UnboundedReceiver<OutboundMessage>,
}

impl ChannelSurface {
    pub fn new() -> (Self, Outbox) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, Outbox { rx })
    }
}

impl DisplaySurface for ChannelSurface {
    fn post_message(&self, message: OutboundMessage) {
        if self.tx.send(message).is_err() {
            warn!("Display surface is gone, dropping outbound message");
        }
    }
}

impl Outbox {
    /// Takes every message posted so far, in posting order.
    pub fn drain(&mut self) -> Vec<OutboundMessage> {
        let mut messages = Vec::new();
        while let Ok(message) = self.rx.try_recv() {
            messages.push(message);
        }
        messages
    }
}
