//! Application state - shared across all handlers.

use std::sync::Arc;

use anpr_core::ports::CardNotifier;
use anpr_core::{AlertRelay, RelaySettings};
use anpr_infra::InMemoryNotifier;

use crate::config::AppConfig;

#[cfg(feature = "webhook")]
use anpr_infra::{WebhookConfig, WebhookNotifier};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<AlertRelay>,
    pub webhook_configured: bool,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let settings = config.relay.settings()?;

        #[cfg(feature = "webhook")]
        let notifier: Arc<dyn CardNotifier> = match &config.webhook {
            Some(webhook) => {
                tracing::info!("Incoming webhook configured");
                Arc::new(WebhookNotifier::new(WebhookConfig {
                    url: webhook.url.clone(),
                    timeout: webhook.timeout,
                })?)
            }
            None => {
                tracing::warn!("WEBHOOK_URL not set. Cards will be kept in memory only.");
                Arc::new(InMemoryNotifier::new())
            }
        };

        #[cfg(not(feature = "webhook"))]
        let notifier: Arc<dyn CardNotifier> = {
            tracing::info!("Running without webhook feature - using in-memory notifier");
            Arc::new(InMemoryNotifier::new())
        };

        tracing::info!("Application state initialized");

        Ok(Self::with_notifier(
            notifier,
            settings,
            cfg!(feature = "webhook") && config.webhook.is_some(),
        ))
    }

    /// Build state around an explicit notifier.
    pub fn with_notifier(
        notifier: Arc<dyn CardNotifier>,
        settings: RelaySettings,
        webhook_configured: bool,
    ) -> Self {
        Self {
            relay: Arc::new(AlertRelay::new(notifier, settings)),
            webhook_configured,
        }
    }
}
