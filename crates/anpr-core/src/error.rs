//! Domain-level error types.

use thiserror::Error;

use crate::ports::DeliveryError;

/// Relay errors - failures while turning an alert into a delivered card.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Malformed alert payload: {0}")]
    MalformedInput(String),

    #[error("Card delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Errors raised while building relay settings from configuration.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Invalid timestamp pattern: {0}")]
    InvalidPattern(String),

    #[error("UTC offset out of range: {0} hours")]
    OffsetOutOfRange(i32),

    #[error("UTC offset is not a whole number of hours: {0:?}")]
    InvalidOffset(String),
}
