// self
use crate::{
	_prelude::*,
	auth::Authorization,
	error::ConfigError,
	flows::{Relay, common},
	http::{UpstreamBody, UpstreamHttpClient, UpstreamMethod, UpstreamRequest},
	models::PlanRequest,
	obs::RelayCall,
};

impl<C> Relay<C>
where
	C: ?Sized + UpstreamHttpClient,
{
	/// Validates `request`, posts it to the issuances endpoint, and returns the whole body.
	pub async fn create_issuance(&self, request: &PlanRequest) -> Result<Value> {
		const CALL: RelayCall = RelayCall::IssuanceCreate;

		request.validate()?;

		let payload = serde_json::to_value(request).map_err(ConfigError::PayloadEncode)?;

		common::observe(CALL, "create_issuance", async move {
			let token = self.access_token().await?;
			let request = UpstreamRequest {
				call: CALL,
				method: UpstreamMethod::Post,
				url: self.settings.endpoints.issuances.clone(),
				authorization: Authorization::Bearer(token),
				body: UpstreamBody::Json(payload),
			};
			let (status, body) = common::dispatch(self, request).await?;

			Ok(common::require_body(CALL, status, body)?)
		})
		.await
	}

	/// Looks up an issued plan by identifier and returns the whole body.
	pub async fn fetch_issuance(&self, id: &str) -> Result<Value> {
		const CALL: RelayCall = RelayCall::IssuanceLookup;

		let url = issuance_url(&self.settings.endpoints.issuances, id)?;

		common::observe(CALL, "fetch_issuance", async move {
			let token = self.access_token().await?;
			let request = UpstreamRequest {
				call: CALL,
				method: UpstreamMethod::Get,
				url,
				authorization: Authorization::Bearer(token),
				body: UpstreamBody::Empty,
			};
			let (status, body) = common::dispatch(self, request).await?;

			Ok(common::require_body(CALL, status, body)?)
		})
		.await
	}
}

/// Builds `<issuances>/<id>` with the identifier appended as-is.
pub fn issuance_url(issuances: &Url, id: &str) -> Result<Url, ConfigError> {
	let raw = format!("{}/{id}", issuances.as_str().trim_end_matches('/'));

	Url::parse(&raw).map_err(|source| ConfigError::InvalidRequestUrl { url: raw, source })
}
