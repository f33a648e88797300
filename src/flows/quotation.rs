// self
use crate::{
	_prelude::*,
	auth::Authorization,
	error::ConfigError,
	flows::{Relay, common},
	http::{UpstreamBody, UpstreamHttpClient, UpstreamMethod, UpstreamRequest},
	models::QuotationRequest,
	obs::RelayCall,
};

impl<C> Relay<C>
where
	C: ?Sized + UpstreamHttpClient,
{
	/// Validates `request`, forwards it to the quotations endpoint, and returns the insurer's
	/// `responseBody` field unchanged.
	pub async fn quote(&self, request: &QuotationRequest) -> Result<Value> {
		const CALL: RelayCall = RelayCall::Quotation;

		request.validate()?;

		let payload = serde_json::to_value(request).map_err(ConfigError::PayloadEncode)?;

		common::observe(CALL, "quote", async move {
			let token = self.access_token().await?;
			let request = UpstreamRequest {
				call: CALL,
				method: UpstreamMethod::Post,
				url: self.settings.endpoints.quotations.clone(),
				authorization: Authorization::Bearer(token),
				body: UpstreamBody::Json(payload),
			};
			let (status, body) = common::dispatch(self, request).await?;

			Ok(common::require_field(CALL, status, body, "responseBody")?)
		})
		.await
	}
}
