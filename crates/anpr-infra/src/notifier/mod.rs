//! Card notifier implementations - incoming webhook and in-memory fallback.

mod memory;

#[cfg(feature = "webhook")]
mod webhook;

pub use memory::InMemoryNotifier;

#[cfg(feature = "webhook")]
pub use webhook::{WebhookConfig, WebhookNotifier};
