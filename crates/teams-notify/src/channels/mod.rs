//! Notification channel implementations.

pub mod teams;

use async_trait::async_trait;

use crate::card::MessageCard;
use crate::error::NotifyError;

/// Trait for notification channels.
#[async_trait]
pub trait NotifyChannel: Send + Sync {
    /// Get the name of this channel.
    fn name(&self) -> &'static str;

    /// Check if this channel is enabled/configured.
    fn enabled(&self) -> bool;

    /// Deliver a card to this channel.
    async fn send(&self, card: &MessageCard) -> Result<(), NotifyError>;
}
