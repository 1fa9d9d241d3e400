//! # ANPR Infrastructure
//!
//! Concrete implementations of the ports defined in `anpr-core`.
//!
//! ## Feature Flags
//!
//! - `webhook` (default) - deliver cards to an incoming webhook via reqwest

pub mod notifier;

pub use notifier::InMemoryNotifier;

#[cfg(feature = "webhook")]
pub use notifier::{WebhookConfig, WebhookNotifier};
