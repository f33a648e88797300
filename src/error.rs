//! Relay-level error types shared across settings, transport, and forwarding flows.

// self
use crate::{_prelude::*, obs::RelayCall, settings::SettingsError};

/// Relay-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical relay error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS) while talking to the insurer.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The insurer answered without the field the call expects.
	#[error(transparent)]
	Upstream(#[from] UpstreamError),
	/// Inbound payload violates its field constraints.
	#[error("Request payload failed validation: {0}")]
	Validation(#[from] validator::ValidationErrors),
	/// Local I/O failure (listener bind, accept loop).
	#[error("I/O error occurred while serving the relay.")]
	Io(#[from] std::io::Error),
}
impl From<SettingsError> for Error {
	fn from(e: SettingsError) -> Self {
		Self::Config(e.into())
	}
}

/// Configuration and request-construction failures raised by the relay.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Settings are missing or invalid.
	#[error(transparent)]
	Settings(#[from] SettingsError),
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Outbound URL assembled from an endpoint and a caller value does not parse.
	#[error("Outbound URL `{url}` is invalid.")]
	InvalidRequestUrl {
		/// Offending URL text.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Payload could not be serialized for the insurer.
	#[error("Request payload could not be serialized.")]
	PayloadEncode(#[source] serde_json::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, TLS).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the insurer {call} endpoint.")]
	Network {
		/// Call that was in flight.
		call: RelayCall,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(call: RelayCall, src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { call, source: Box::new(src) }
	}
}

/// The insurer responded, but not with what the call expects.
///
/// Every variant keeps the HTTP status and, when the body parsed, the raw JSON so callers
/// can surface the insurer's own explanation.
#[derive(Debug, ThisError)]
pub enum UpstreamError {
	/// The expected field is absent or falsy.
	#[error("Insurer {call} response did not include `{field}`.")]
	MissingField {
		/// Call that produced the response.
		call: RelayCall,
		/// Field the call expected.
		field: &'static str,
		/// HTTP status code of the response.
		status: u16,
		/// Raw response body.
		body: Value,
	},
	/// The whole body is falsy (`null`, `{}`, `[]`, and friends).
	#[error("Insurer {call} response was empty.")]
	EmptyBody {
		/// Call that produced the response.
		call: RelayCall,
		/// HTTP status code of the response.
		status: u16,
		/// Raw response body.
		body: Value,
	},
	/// The body is not valid JSON.
	#[error("Insurer {call} response is not valid JSON.")]
	MalformedJson {
		/// Call that produced the response.
		call: RelayCall,
		/// HTTP status code of the response.
		status: u16,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl UpstreamError {
	/// Call that produced the failing response.
	pub fn call(&self) -> RelayCall {
		match self {
			Self::MissingField { call, .. }
			| Self::EmptyBody { call, .. }
			| Self::MalformedJson { call, .. } => *call,
		}
	}

	/// HTTP status code of the failing response.
	pub fn status(&self) -> u16 {
		match self {
			Self::MissingField { status, .. }
			| Self::EmptyBody { status, .. }
			| Self::MalformedJson { status, .. } => *status,
		}
	}

	/// Raw response body, when it parsed as JSON.
	pub fn body(&self) -> Option<&Value> {
		match self {
			Self::MissingField { body, .. } | Self::EmptyBody { body, .. } => Some(body),
			Self::MalformedJson { .. } => None,
		}
	}
}
