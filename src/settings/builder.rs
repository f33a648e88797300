// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
// self
use crate::{
	_prelude::*,
	auth::Secret,
	settings::{RelayCredentials, RelayEndpoints, RelaySettings, SettingsError},
};

/// Builder for [`RelaySettings`] values.
#[derive(Debug, Default)]
pub struct RelaySettingsBuilder {
	/// Token endpoint shared by both grants.
	pub tokens_endpoint: Option<Url>,
	/// Quotations endpoint.
	pub quotations_endpoint: Option<Url>,
	/// Issuances endpoint.
	pub issuances_endpoint: Option<Url>,
	/// Pre-encoded Basic header value.
	pub basic_authorization: Option<Secret>,
	/// Password grant username.
	pub username: Option<String>,
	/// Password grant password.
	pub password: Option<Secret>,
}
impl RelaySettingsBuilder {
	/// Sets the token endpoint.
	pub fn tokens_endpoint(mut self, url: Url) -> Self {
		self.tokens_endpoint = Some(url);

		self
	}

	/// Sets the quotations endpoint.
	pub fn quotations_endpoint(mut self, url: Url) -> Self {
		self.quotations_endpoint = Some(url);

		self
	}

	/// Sets the issuances endpoint.
	pub fn issuances_endpoint(mut self, url: Url) -> Self {
		self.issuances_endpoint = Some(url);

		self
	}

	/// Sets the already base64-encoded Basic header value.
	pub fn basic_authorization(mut self, value: impl Into<String>) -> Self {
		self.basic_authorization = Some(Secret::new(value));

		self
	}

	/// Derives the Basic header value from a client identifier/secret pair.
	pub fn basic_credentials(self, client_id: &str, client_secret: &str) -> Self {
		let encoded = STANDARD.encode(format!("{client_id}:{client_secret}"));

		self.basic_authorization(encoded)
	}

	/// Sets the password grant username.
	pub fn username(mut self, username: impl Into<String>) -> Self {
		self.username = Some(username.into());

		self
	}

	/// Sets the password grant password.
	pub fn password(mut self, password: impl Into<String>) -> Self {
		self.password = Some(Secret::new(password));

		self
	}

	/// Consumes the builder and validates the resulting settings.
	pub fn build(self) -> Result<RelaySettings, SettingsError> {
		let endpoints = RelayEndpoints {
			tokens: require_endpoint("tokens", self.tokens_endpoint)?,
			quotations: require_endpoint("quotations", self.quotations_endpoint)?,
			issuances: require_endpoint("issuances", self.issuances_endpoint)?,
		};
		let basic_authorization = self
			.basic_authorization
			.ok_or(SettingsError::MissingCredential { credential: "basic_authorization" })?;
		let username =
			self.username.ok_or(SettingsError::MissingCredential { credential: "username" })?;
		let password =
			self.password.ok_or(SettingsError::MissingCredential { credential: "password" })?;

		if basic_authorization.is_blank() {
			return Err(SettingsError::BlankCredential { credential: "basic_authorization" });
		}
		if username.trim().is_empty() {
			return Err(SettingsError::BlankCredential { credential: "username" });
		}
		if password.is_blank() {
			return Err(SettingsError::BlankCredential { credential: "password" });
		}

		Ok(RelaySettings {
			endpoints,
			credentials: RelayCredentials { basic_authorization, username, password },
		})
	}
}

fn require_endpoint(endpoint: &'static str, url: Option<Url>) -> Result<Url, SettingsError> {
	let url = url.ok_or(SettingsError::MissingEndpoint { endpoint })?;

	match url.scheme() {
		"http" | "https" => Ok(url),
		_ => Err(SettingsError::UnsupportedScheme { endpoint, url: url.to_string() }),
	}
}
