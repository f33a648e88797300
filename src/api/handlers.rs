// crates.io
use axum::{
	Json,
	extract::{Path, State},
};
// self
use crate::{
	_prelude::*,
	api::ApiError,
	flows::Relay,
	http::UpstreamHttpClient,
	models::{PlanRequest, QuotationRequest},
};

/// `POST /api/v1/cotizaciones/`
pub(super) async fn quote<C>(
	State(relay): State<Relay<C>>,
	Json(request): Json<QuotationRequest>,
) -> Result<Json<Value>, ApiError>
where
	C: ?Sized + UpstreamHttpClient,
{
	Ok(Json(relay.quote(&request).await?))
}

/// `POST /api/v1/plans/`
pub(super) async fn create_plan<C>(
	State(relay): State<Relay<C>>,
	Json(request): Json<PlanRequest>,
) -> Result<Json<Value>, ApiError>
where
	C: ?Sized + UpstreamHttpClient,
{
	Ok(Json(relay.create_issuance(&request).await?))
}

/// `GET /api/v1/plans/{id}`
pub(super) async fn fetch_plan<C>(
	State(relay): State<Relay<C>>,
	Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
	C: ?Sized + UpstreamHttpClient,
{
	Ok(Json(relay.fetch_issuance(&id).await?))
}

/// `GET /api/v1/utils/health-check/`
pub(super) async fn health_check() -> Json<bool> {
	Json(true)
}
