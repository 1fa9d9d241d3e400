//! Ports - trait definitions for external dependencies.

mod notifier;

pub use notifier::{CardNotifier, DeliveryError};
