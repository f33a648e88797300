//! Token acquisition: password grant, then refresh grant, on every call.
//!
//! The insurer only hands out bearer tokens through its refresh grant, so the relay first
//! runs `grant_type=password` to obtain a refresh token and immediately exchanges it. Both
//! calls carry the configured `Authorization: Basic` value. Nothing is cached.

// self
use crate::{
	_prelude::*,
	auth::{Authorization, GrantType, Secret},
	flows::{Relay, common},
	http::{UpstreamBody, UpstreamHttpClient, UpstreamMethod, UpstreamRequest},
	obs::RelayCall,
};

impl<C> Relay<C>
where
	C: ?Sized + UpstreamHttpClient,
{
	/// Runs the password grant followed by the refresh grant and returns the bearer token.
	pub async fn access_token(&self) -> Result<Secret> {
		let refresh_token = self.generate_refresh_token().await?;

		self.exchange_refresh_token(&refresh_token).await
	}

	/// Performs the password grant and returns the issued refresh token.
	pub async fn generate_refresh_token(&self) -> Result<Secret> {
		let credentials = &self.settings.credentials;

		self.grant(
			GrantType::Password,
			vec![
				("username".into(), credentials.username.clone()),
				("password".into(), credentials.password.expose().to_owned()),
			],
		)
		.await
	}

	/// Performs the refresh grant and returns the issued access token.
	pub async fn exchange_refresh_token(&self, refresh_token: &Secret) -> Result<Secret> {
		self.grant(
			GrantType::RefreshToken,
			vec![("refresh_token".into(), refresh_token.expose().to_owned())],
		)
		.await
	}

	async fn grant(&self, grant: GrantType, params: Vec<(String, String)>) -> Result<Secret> {
		let call = match grant {
			GrantType::Password => RelayCall::PasswordGrant,
			GrantType::RefreshToken => RelayCall::RefreshGrant,
		};

		common::observe(call, "grant", async move {
			let mut form = Vec::with_capacity(params.len() + 1);

			form.push(("grant_type".to_owned(), grant.as_str().to_owned()));
			form.extend(params);

			let request = UpstreamRequest {
				call,
				method: UpstreamMethod::Post,
				url: self.settings.endpoints.tokens.clone(),
				authorization: Authorization::Basic(
					self.settings.credentials.basic_authorization.clone(),
				),
				body: UpstreamBody::Form(form),
			};
			let (status, body) = common::dispatch(self, request).await?;
			let token = common::require_field(call, status, body, grant.yields())?;

			Ok(Secret::new(common::token_text(token)))
		})
		.await
	}
}
