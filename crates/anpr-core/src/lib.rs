//! # ANPR Core
//!
//! The domain layer of the ANPR alert relay.
//! Alert extraction, card rendering and the relay service live here, with
//! delivery abstracted behind the [`ports::CardNotifier`] trait.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{RelayError, SettingsError};
pub use service::{AlertRelay, RelaySettings};
