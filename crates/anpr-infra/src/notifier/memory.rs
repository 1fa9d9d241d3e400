//! In-memory notifier - used when no webhook is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use anpr_core::domain::MessageCard;
use anpr_core::ports::{CardNotifier, DeliveryError};

/// Keeps delivered cards in memory instead of posting them.
///
/// Note: Cards are lost on process restart.
pub struct InMemoryNotifier {
    delivered: RwLock<Vec<MessageCard>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self {
            delivered: RwLock::new(Vec::new()),
        }
    }

    /// Cards delivered so far, oldest first.
    pub async fn delivered(&self) -> Vec<MessageCard> {
        self.delivered.read().await.clone()
    }
}

impl Default for InMemoryNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CardNotifier for InMemoryNotifier {
    async fn deliver(&self, card: &MessageCard) -> Result<(), DeliveryError> {
        tracing::warn!(title = %card.title, "No webhook configured - card kept in memory");
        self.delivered.write().await.push(card.clone());
        Ok(())
    }
}
