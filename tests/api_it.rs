#![cfg(feature = "server")]

mod common;

// crates.io
use axum::{
	body::{Body, to_bytes},
	http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;
// self
use common::*;
use seguros_relay::{api, http::UpstreamResponse, obs::RelayCall};

async fn send(app: axum::Router, request: Request<Body>) -> color_eyre::Result<(StatusCode, Value)> {
	let response = app.oneshot(request).await?;
	let status = response.status();
	let bytes = to_bytes(response.into_body(), usize::MAX).await?;
	// Extractor rejections answer in plain text.
	let body = serde_json::from_slice(&bytes)
		.unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

	Ok((status, body))
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
	Request::post(uri)
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(body.to_string()))
		.expect("Test request should build.")
}

#[tokio::test]
async fn quotation_route_returns_response_body() -> color_eyre::Result<()> {
	let [password, refresh] = token_responses("access-api");
	let quotation =
		UpstreamResponse::json(200, &json!({ "responseBody": [{ "plan": "A1", "prima": 10.0 }] }));
	let (relay, client) = recording_relay([password, refresh, quotation]);
	let (status, body) =
		send(api::router(relay), post_json("/api/v1/cotizaciones/", &quotation_json())).await?;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!([{ "plan": "A1", "prima": 10.0 }]));
	assert_eq!(client.calls().len(), 3);

	Ok(())
}

#[tokio::test]
async fn invalid_quotation_is_rejected_without_upstream_calls() -> color_eyre::Result<()> {
	let (relay, client) = recording_relay([]);
	let app = api::router(relay);
	let mut short_id = quotation_json();

	short_id["idConvenio"] = json!("CONV-1");

	let mut bad_email = quotation_json();

	bad_email["distribuidorEmail"] = json!("ventas");

	for (payload, field) in [(short_id, "idConvenio"), (bad_email, "distribuidorEmail")] {
		let (status, body) = send(app.clone(), post_json("/api/v1/cotizaciones/", &payload)).await?;

		assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
		assert!(body["detail"].get(field).is_some(), "{body} should name `{field}`.");
	}

	let mut missing = quotation_json();

	missing.as_object_mut().expect("Fixture is an object.").remove("cotizaciones");

	let (status, _) = send(app, post_json("/api/v1/cotizaciones/", &missing)).await?;

	assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
	assert!(client.calls().is_empty());

	Ok(())
}

#[tokio::test]
async fn plan_routes_relay_creation_and_lookup() -> color_eyre::Result<()> {
	let [p1, r1] = token_responses("access-create");
	let [p2, r2] = token_responses("access-lookup");
	let created = UpstreamResponse::json(200, &json!({ "poliza": "POL-5" }));
	let found = UpstreamResponse::json(200, &json!({ "poliza": "POL-5", "estatus": "VIGENTE" }));
	let (relay, client) = recording_relay([p1, r1, created, p2, r2, found]);
	let app = api::router(relay);
	let (status, body) = send(app.clone(), post_json("/api/v1/plans/", &plan_json())).await?;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!({ "poliza": "POL-5" }));

	let request = Request::get("/api/v1/plans/POL-5").body(Body::empty())?;
	let (status, body) = send(app, request).await?;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["estatus"], "VIGENTE");

	let requests = client.requests();

	assert_eq!(requests[5].call, RelayCall::IssuanceLookup);
	assert_eq!(requests[5].url.as_str(), "https://insurer.test/emisiones/POL-5");

	Ok(())
}

#[tokio::test]
async fn upstream_failures_surface_raw_response() -> color_eyre::Result<()> {
	let [password, refresh] = token_responses("access-empty");
	let (relay, _client) =
		recording_relay([password, refresh, UpstreamResponse::json(200, &json!(null))]);
	let request = Request::get("/api/v1/plans/POL-404").body(Body::empty())?;
	let (status, body) = send(api::router(relay), request).await?;

	assert_eq!(status, StatusCode::BAD_GATEWAY);
	assert_eq!(body["call"], "issuance_lookup");
	assert_eq!(body["upstream"], Value::Null);
	assert_eq!(body["status"], 200);

	Ok(())
}

#[tokio::test]
async fn health_check_answers_true() -> color_eyre::Result<()> {
	let (relay, _client) = recording_relay([]);
	let request = Request::get("/api/v1/utils/health-check/").body(Body::empty())?;
	let (status, body) = send(api::router(relay), request).await?;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!(true));

	Ok(())
}
