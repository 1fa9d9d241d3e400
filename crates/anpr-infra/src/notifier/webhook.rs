//! Incoming webhook notifier - posts cards to a Teams-style connector URL.

use std::time::Duration;

use async_trait::async_trait;

use anpr_core::domain::MessageCard;
use anpr_core::ports::{CardNotifier, DeliveryError};

/// Webhook delivery configuration.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    pub url: String,
    /// No timeout when unset.
    pub timeout: Option<Duration>,
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }
}

/// Delivers each card with a single POST. Non-2xx responses are failures.
pub struct WebhookNotifier {
    url: String,
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(config: WebhookConfig) -> Result<Self, DeliveryError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        Ok(Self {
            url: config.url,
            client,
        })
    }
}

#[async_trait]
impl CardNotifier for WebhookNotifier {
    async fn deliver(&self, card: &MessageCard) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.url)
            .json(card)
            .send()
            .await
            // The webhook URL embeds its access key.
            .map_err(|e| DeliveryError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                tracing::debug!(error = %e, "Failed to read webhook rejection body");
                format!("<unreadable body: {}>", e.without_url())
            });
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(status = status.as_u16(), "Webhook accepted card");
        Ok(())
    }
}
