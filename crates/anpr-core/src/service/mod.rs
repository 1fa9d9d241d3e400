//! Application services built on the domain and ports.

mod relay;

pub use relay::{AlertRelay, FALLBACK_MESSAGE, RelaySettings};
