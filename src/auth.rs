//! Credential primitives used by the token exchange.

pub mod grant;
pub mod secret;

pub use grant::*;
pub use secret::*;
