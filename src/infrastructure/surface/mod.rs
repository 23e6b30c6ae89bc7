//! Display surface implementations.

pub mod channel_surface;

pub use channel_surface::{ChannelSurface, Outbox};
