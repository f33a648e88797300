//! Optional observability helpers for relay calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `seguros_relay.call` with the `call` and
//!   `stage` (call site) fields.
//! - Enable `metrics` to increment the `seguros_relay_call_total` counter for every
//!   attempt/success/failure, labeled by `call` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Insurer calls performed by the relay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelayCall {
	/// `grant_type=password` call against the token endpoint.
	PasswordGrant,
	/// `grant_type=refresh_token` call against the token endpoint.
	RefreshGrant,
	/// Quotation forwarding.
	Quotation,
	/// Plan/policy issuance creation.
	IssuanceCreate,
	/// Plan/policy lookup by identifier.
	IssuanceLookup,
}
impl RelayCall {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RelayCall::PasswordGrant => "password_grant",
			RelayCall::RefreshGrant => "refresh_grant",
			RelayCall::Quotation => "quotation",
			RelayCall::IssuanceCreate => "issuance_create",
			RelayCall::IssuanceLookup => "issuance_lookup",
		}
	}
}
impl Display for RelayCall {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a relay operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
