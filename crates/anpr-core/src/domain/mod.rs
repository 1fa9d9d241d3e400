//! Domain types - the alert that comes in and the card that goes out.

mod alert;
mod card;
mod derived;

pub use alert::AlertPayload;
pub use card::{CardSection, Fact, MessageCard, PlateCardFields};
pub use derived::{TimestampFormat, ViewerLink, normalize_make_model};
