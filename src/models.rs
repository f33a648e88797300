//! Insurer payloads accepted by the relay.
//!
//! The structs mirror the insurer's JSON contracts field for field (camelCase on the wire)
//! and declare their size/format constraints through [`validator::Validate`], so a payload
//! is rejected before any token or forwarding call is attempted.

pub mod issuance;
pub mod quotation;

pub use issuance::*;
pub use quotation::*;
