//! Grant types and outbound `Authorization` headers.

// self
use crate::{_prelude::*, auth::Secret};

/// OAuth 2.0 grant types used against the insurer token endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Resource owner password grant, issued with the configured username/password.
	Password,
	/// Refresh token grant, exchanging the password grant's refresh token.
	RefreshToken,
}
impl GrantType {
	/// Returns the RFC 6749 identifier for the grant type.
	pub fn as_str(self) -> &'static str {
		match self {
			GrantType::Password => "password",
			GrantType::RefreshToken => "refresh_token",
		}
	}

	/// Token response field this grant is expected to yield.
	pub fn yields(self) -> &'static str {
		match self {
			GrantType::Password => "refresh_token",
			GrantType::RefreshToken => "access_token",
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// `Authorization` header carried by an outbound request.
#[derive(Clone, PartialEq, Eq)]
pub enum Authorization {
	/// `Basic <value>`, with the value already base64-encoded.
	Basic(Secret),
	/// `Bearer <token>`.
	Bearer(Secret),
}
impl Authorization {
	/// Renders the full header value. Callers must avoid logging this string.
	pub fn header_value(&self) -> String {
		match self {
			Self::Basic(value) => format!("Basic {}", value.expose()),
			Self::Bearer(token) => format!("Bearer {}", token.expose()),
		}
	}

	/// Scheme label without the credential.
	pub fn scheme(&self) -> &'static str {
		match self {
			Self::Basic(_) => "Basic",
			Self::Bearer(_) => "Bearer",
		}
	}
}
impl Debug for Authorization {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Authorization({} <redacted>)", self.scheme())
	}
}
