//! Transport primitives for insurer calls.
//!
//! [`UpstreamHttpClient`] is the relay's only dependency on an HTTP stack. The default
//! [`ReqwestHttpClient`] covers production use; tests and custom deployments plug in their
//! own implementation to observe or script the exchange.

// self
use crate::{_prelude::*, auth::Authorization, error::TransportError, obs::RelayCall};

/// Boxed future returned by [`UpstreamHttpClient::execute`].
pub type UpstreamFuture<'a> =
	Pin<Box<dyn Future<Output = Result<UpstreamResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing insurer calls.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can be shared by
/// every inbound request, and the returned future must be `Send` so handlers can run on a
/// multi-threaded executor. Non-2xx statuses are responses, not errors: report them through
/// [`UpstreamResponse::status`] and reserve [`TransportError`] for network failures.
pub trait UpstreamHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Executes `request` and buffers the full response body.
	fn execute(&self, request: UpstreamRequest) -> UpstreamFuture<'_>;
}

/// HTTP methods the relay issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpstreamMethod {
	/// `GET`.
	Get,
	/// `POST`.
	Post,
}
impl UpstreamMethod {
	/// Returns the method token.
	pub const fn as_str(self) -> &'static str {
		match self {
			UpstreamMethod::Get => "GET",
			UpstreamMethod::Post => "POST",
		}
	}
}
impl Display for UpstreamMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outbound request body.
#[derive(Clone, Debug, PartialEq)]
pub enum UpstreamBody {
	/// No body.
	Empty,
	/// `application/x-www-form-urlencoded` pairs, in order.
	Form(Vec<(String, String)>),
	/// `application/json` document.
	Json(Value),
}
impl UpstreamBody {
	/// Looks up a form field by name.
	pub fn form_value(&self, key: &str) -> Option<&str> {
		match self {
			Self::Form(pairs) =>
				pairs.iter().find(|(name, _)| name == key).map(|(_, value)| value.as_str()),
			_ => None,
		}
	}
}

/// Single outbound call to the insurer.
#[derive(Clone, Debug)]
pub struct UpstreamRequest {
	/// Call being performed; used for error context and observability.
	pub call: RelayCall,
	/// HTTP method.
	pub method: UpstreamMethod,
	/// Target URL.
	pub url: Url,
	/// `Authorization` header value.
	pub authorization: Authorization,
	/// Request body.
	pub body: UpstreamBody,
}

/// Buffered insurer response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpstreamResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw body bytes.
	pub body: Vec<u8>,
}
impl UpstreamResponse {
	/// Builds a response from a status and a JSON document.
	pub fn json(status: u16, body: &Value) -> Self {
		Self { status, body: body.to_string().into_bytes() }
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl std::ops::Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl UpstreamHttpClient for ReqwestHttpClient {
	fn execute(&self, request: UpstreamRequest) -> UpstreamFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let call = request.call;
			let builder = match request.method {
				UpstreamMethod::Get => client.get(request.url),
				UpstreamMethod::Post => client.post(request.url),
			}
			.header(reqwest::header::AUTHORIZATION, request.authorization.header_value());
			let builder = match &request.body {
				UpstreamBody::Empty => builder,
				UpstreamBody::Form(pairs) => builder.form(pairs),
				UpstreamBody::Json(value) => builder.json(value),
			};
			let response =
				builder.send().await.map_err(|err| TransportError::network(call, err))?;
			let status = response.status().as_u16();
			let body =
				response.bytes().await.map_err(|err| TransportError::network(call, err))?.to_vec();

			Ok(UpstreamResponse { status, body })
		})
	}
}
