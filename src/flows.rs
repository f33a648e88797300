//! Forwarding operations powered by the relay facade.
//!
//! Every operation is independent: it validates its payload, runs the full token exchange
//! ([`Relay::access_token`]), and issues exactly one call to the insurer. Nothing is cached
//! between operations.

pub mod common;

mod issuance;
mod quotation;
mod token;

pub use issuance::issuance_url;

// self
use crate::{_prelude::*, http::UpstreamHttpClient, settings::RelaySettings};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Relay specialized for the crate's default reqwest transport.
pub type ReqwestRelay = Relay<ReqwestHttpClient>;

/// Forwards quotation and issuance calls to a single insurer.
///
/// The relay owns the HTTP client and the validated settings; both sit behind [`Arc`] so
/// cloning a relay for each inbound request is cheap.
pub struct Relay<C>
where
	C: ?Sized + UpstreamHttpClient,
{
	/// HTTP client used for every outbound insurer request.
	pub http_client: Arc<C>,
	/// Endpoints and token credentials.
	pub settings: Arc<RelaySettings>,
}
impl<C> Relay<C>
where
	C: ?Sized + UpstreamHttpClient,
{
	/// Creates a relay that reuses the caller-provided transport.
	pub fn with_http_client(settings: RelaySettings, http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into(), settings: Arc::new(settings) }
	}
}
#[cfg(feature = "reqwest")]
impl Relay<ReqwestHttpClient> {
	/// Creates a new relay backed by a default reqwest client.
	pub fn new(settings: RelaySettings) -> Self {
		Self::with_http_client(settings, ReqwestHttpClient::default())
	}
}
impl<C> Clone for Relay<C>
where
	C: ?Sized + UpstreamHttpClient,
{
	fn clone(&self) -> Self {
		Self { http_client: Arc::clone(&self.http_client), settings: Arc::clone(&self.settings) }
	}
}
impl<C> Debug for Relay<C>
where
	C: ?Sized + UpstreamHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Relay")
			.field("endpoints", &self.settings.endpoints)
			.field("username", &self.settings.credentials.username)
			.finish()
	}
}
