use async_trait::async_trait;

use crate::domain::MessageCard;

/// Card notifier - abstraction over chat delivery backends (incoming webhook, in-memory).
#[async_trait]
pub trait CardNotifier: Send + Sync {
    /// Deliver a single card. Implementations must not retry.
    async fn deliver(&self, card: &MessageCard) -> Result<(), DeliveryError>;
}

/// Delivery errors.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("Webhook rejected card with status {status}: {body}")]
    Rejected { status: u16, body: String },
}
