//! Relay settings: insurer endpoints, token credentials, and listener address.
//!
//! Settings are validated once at construction so forwarding flows never re-check them.
//! [`RelaySettings::from_env`] reads the same variable names the insurer integration has
//! always used (`API_URL_TOKENS`, `API_AUTHORIZATION`, ...).

/// Builder API for assembling relay settings.
pub mod builder;

pub use builder::*;

// std
use std::net::{AddrParseError, SocketAddr};
// crates.io
use config::{Config, Environment};
// self
use crate::{_prelude::*, auth::Secret};

/// Errors raised while loading or validating settings.
#[derive(Debug, ThisError)]
pub enum SettingsError {
	/// An insurer endpoint was not configured.
	#[error("Missing {endpoint} endpoint.")]
	MissingEndpoint {
		/// Which endpoint is missing.
		endpoint: &'static str,
	},
	/// An endpoint value could not be parsed as a URL.
	#[error("The {endpoint} endpoint is not a valid URL.")]
	InvalidEndpoint {
		/// Which endpoint failed to parse.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoints must speak HTTP(S).
	#[error("The {endpoint} endpoint must use http or https: {url}.")]
	UnsupportedScheme {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// A token credential was not configured.
	#[error("Missing {credential} credential.")]
	MissingCredential {
		/// Which credential is missing.
		credential: &'static str,
	},
	/// A token credential was configured but blank.
	#[error("The {credential} credential cannot be blank.")]
	BlankCredential {
		/// Which credential is blank.
		credential: &'static str,
	},
	/// Listener address could not be parsed.
	#[error("Bind address `{value}` is invalid.")]
	InvalidBindAddress {
		/// Raw configured value.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: AddrParseError,
	},
	/// The environment source could not be read.
	#[error("Unable to read settings from the environment.")]
	Environment(#[from] config::ConfigError),
}

/// Insurer endpoints used by the relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayEndpoints {
	/// Token endpoint shared by the password and refresh grants.
	pub tokens: Url,
	/// Quotations endpoint (POST).
	pub quotations: Url,
	/// Issuances endpoint (POST to create, GET `<issuances>/<id>` to look up).
	pub issuances: Url,
}

/// Credentials presented to the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayCredentials {
	/// Base64 value sent as `Authorization: Basic <value>` on both grants.
	pub basic_authorization: Secret,
	/// Resource owner username for the password grant.
	pub username: String,
	/// Resource owner password for the password grant.
	pub password: Secret,
}

/// Immutable, validated relay settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelaySettings {
	/// Insurer endpoints.
	pub endpoints: RelayEndpoints,
	/// Token endpoint credentials.
	pub credentials: RelayCredentials,
}
impl RelaySettings {
	/// Creates a new, empty builder.
	pub fn builder() -> RelaySettingsBuilder {
		RelaySettingsBuilder::default()
	}

	/// Loads settings from the process environment.
	pub fn from_env() -> Result<Self, SettingsError> {
		Self::from_environment(Environment::default())
	}

	/// Loads settings from the provided environment source.
	///
	/// Tests inject a map through [`Environment::source`] instead of mutating the process
	/// environment.
	pub fn from_environment(environment: Environment) -> Result<Self, SettingsError> {
		let raw: RawRelaySettings =
			Config::builder().add_source(environment).build()?.try_deserialize()?;
		let mut builder = Self::builder();

		if let Some(value) = raw.api_url_tokens {
			builder = builder.tokens_endpoint(parse_endpoint("tokens", &value)?);
		}
		if let Some(value) = raw.api_url_cotizaciones {
			builder = builder.quotations_endpoint(parse_endpoint("quotations", &value)?);
		}
		if let Some(value) = raw.api_url_emisiones {
			builder = builder.issuances_endpoint(parse_endpoint("issuances", &value)?);
		}
		if let Some(value) = raw.api_authorization {
			builder = builder.basic_authorization(value);
		}
		if let Some(value) = raw.api_authorization_username {
			builder = builder.username(value);
		}
		if let Some(value) = raw.api_authorization_password {
			builder = builder.password(value);
		}

		builder.build()
	}
}

/// Inbound listener settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerSettings {
	/// Socket address the HTTP listener binds to.
	pub bind_address: SocketAddr,
}
impl ServerSettings {
	/// Bind address used when `RELAY_BIND_ADDRESS` is unset.
	pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

	/// Loads listener settings from the process environment.
	pub fn from_env() -> Result<Self, SettingsError> {
		Self::from_environment(Environment::default())
	}

	/// Loads listener settings from the provided environment source.
	pub fn from_environment(environment: Environment) -> Result<Self, SettingsError> {
		let raw: RawServerSettings =
			Config::builder().add_source(environment).build()?.try_deserialize()?;
		let value = raw.relay_bind_address.unwrap_or_else(|| Self::DEFAULT_BIND_ADDRESS.into());
		let bind_address = value
			.parse()
			.map_err(|source| SettingsError::InvalidBindAddress { value: value.clone(), source })?;

		Ok(Self { bind_address })
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRelaySettings {
	api_authorization: Option<String>,
	api_authorization_username: Option<String>,
	api_authorization_password: Option<String>,
	api_url_tokens: Option<String>,
	api_url_cotizaciones: Option<String>,
	api_url_emisiones: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawServerSettings {
	relay_bind_address: Option<String>,
}

fn parse_endpoint(endpoint: &'static str, value: &str) -> Result<Url, SettingsError> {
	Url::parse(value.trim()).map_err(|source| SettingsError::InvalidEndpoint { endpoint, source })
}
