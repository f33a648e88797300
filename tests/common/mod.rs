//! Shared fixtures for integration tests: settings rooted at a mock base URL, a scripted
//! transport that records every outbound request, and valid insurer payloads.

#![allow(dead_code)]

// std
use std::{collections::VecDeque, sync::Arc};
// crates.io
use parking_lot::Mutex;
use serde_json::{Value, json};
use url::Url;
// self
#[cfg(feature = "reqwest")]
use seguros_relay::{flows::ReqwestRelay, http::ReqwestHttpClient};
use seguros_relay::{
	error::TransportError,
	flows::Relay,
	http::{UpstreamFuture, UpstreamHttpClient, UpstreamRequest, UpstreamResponse},
	models::{PlanRequest, QuotationRequest},
	obs::RelayCall,
	settings::{RelaySettings, RelaySettingsBuilder},
};

/// Basic header value configured on every test relay.
pub const TEST_BASIC_AUTHORIZATION: &str = "dGVzdC1jbGllbnQ6dGVzdC1zZWNyZXQ=";
/// Password grant username configured on every test relay.
pub const TEST_USERNAME: &str = "relay-user";
/// Password grant password configured on every test relay.
pub const TEST_PASSWORD: &str = "relay-password";

/// Returns a settings builder whose endpoints live under `base`
/// (`/token`, `/cotizaciones`, `/emisiones`).
pub fn test_settings_builder(base: &str) -> RelaySettingsBuilder {
	let url = |path: &str| {
		Url::parse(&format!("{}{path}", base.trim_end_matches('/')))
			.expect("Test endpoint URL should parse successfully.")
	};

	RelaySettings::builder()
		.tokens_endpoint(url("/token"))
		.quotations_endpoint(url("/cotizaciones"))
		.issuances_endpoint(url("/emisiones"))
		.basic_authorization(TEST_BASIC_AUTHORIZATION)
		.username(TEST_USERNAME)
		.password(TEST_PASSWORD)
}

/// Builds validated test settings rooted at `base`.
pub fn test_settings(base: &str) -> RelaySettings {
	test_settings_builder(base).build().expect("Test relay settings should build successfully.")
}

#[derive(Debug)]
pub struct FakeTransportError;
impl std::fmt::Display for FakeTransportError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.write_str("Connection refused.")
	}
}
impl std::error::Error for FakeTransportError {}

/// Transport that replays scripted responses in order and records each request.
///
/// Once the script runs out every call fails with a network error.
#[derive(Default)]
pub struct RecordingHttpClient {
	script: Mutex<VecDeque<UpstreamResponse>>,
	requests: Mutex<Vec<UpstreamRequest>>,
}
impl RecordingHttpClient {
	pub fn scripted(responses: impl IntoIterator<Item = UpstreamResponse>) -> Arc<Self> {
		Arc::new(Self { script: Mutex::new(responses.into_iter().collect()), ..Default::default() })
	}

	pub fn requests(&self) -> Vec<UpstreamRequest> {
		self.requests.lock().clone()
	}

	pub fn calls(&self) -> Vec<RelayCall> {
		self.requests.lock().iter().map(|request| request.call).collect()
	}
}
impl UpstreamHttpClient for RecordingHttpClient {
	fn execute(&self, request: UpstreamRequest) -> UpstreamFuture<'_> {
		let call = request.call;

		self.requests.lock().push(request);

		let next = self.script.lock().pop_front();

		Box::pin(async move {
			next.ok_or_else(|| TransportError::network(call, FakeTransportError))
		})
	}
}

/// Builds a reqwest transport that accepts the self-signed certificates `httpmock` serves.
#[cfg(feature = "reqwest")]
pub fn test_reqwest_http_client() -> ReqwestHttpClient {
	let client = seguros_relay::reqwest::Client::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestHttpClient::with_client(client)
}

/// Relay over the test reqwest transport with endpoints rooted at `base`.
#[cfg(feature = "reqwest")]
pub fn reqwest_test_relay(base: &str) -> ReqwestRelay {
	Relay::with_http_client(test_settings(base), test_reqwest_http_client())
}

/// Relay wired to a recording transport; endpoints point at `https://insurer.test`.
pub fn recording_relay(
	responses: impl IntoIterator<Item = UpstreamResponse>,
) -> (Relay<RecordingHttpClient>, Arc<RecordingHttpClient>) {
	let client = RecordingHttpClient::scripted(responses);
	let relay = Relay::with_http_client(test_settings("https://insurer.test"), client.clone());

	(relay, client)
}

/// Successful password grant followed by a successful refresh grant.
pub fn token_responses(access_token: &str) -> [UpstreamResponse; 2] {
	[
		UpstreamResponse::json(
			200,
			&json!({ "refresh_token": "refresh-1", "token_type": "bearer", "expires_in": 300 }),
		),
		UpstreamResponse::json(
			200,
			&json!({ "access_token": access_token, "token_type": "bearer", "expires_in": 300 }),
		),
	]
}

pub fn quotation_json() -> Value {
	json!({
		"idConvenio": "CONV-000123",
		"sucClave": "SUC01",
		"sucNombre": "Sucursal Centro",
		"distribuidorClave": "DIST-9",
		"distribuidorNombre": "Distribuidora Norte",
		"distribuidorEmail": "ventas@distribuidora.mx",
		"cotizaciones": [{
			"planComercial": "PLAN-A",
			"detSolicitudes": [{
				"plan": "A1",
				"renovacion": 0,
				"tipo": "T",
				"paquete": "BASICO",
				"fechaNacimiento": "1990-01-31",
				"iniVigReportada": "2026-01-01",
				"finVigReportada": "",
				"plazoReportado": 12,
				"tipoVig": 1,
				"sumAseg4": 1500.5,
				"sumAseg5": 0.0,
				"coberturasPrimaNeta": []
			}]
		}]
	})
}

pub fn quotation_request() -> QuotationRequest {
	serde_json::from_value(quotation_json()).expect("Quotation fixture should deserialize.")
}

pub fn plan_json() -> Value {
	json!({
		"idConvenio": "CONV-000123",
		"sucClave": "SUC",
		"sucNombre": "Sucursal Centro",
		"distribuidorClave": "DIS",
		"distribuidorNombre": "DN",
		"distribuidorEmail": "emision@distribuidora.mx",
		"certificados": [{
			"idTrackCotizacion": "TRACK-00001",
			"filialRfc": "FIL010101",
			"contratanteNombre": "Ana Lopez Ruiz",
			"contratanteRfc": "LORA900131AB1",
			"contratanteRegimenFiscal": "6",
			"contratanteUsoCfdi": "G3",
			"contratanteCodigoPostal": "06600",
			"referenciaDePago": "REF-0000001",
			"transaccionDePago": "TX-00000001",
			"contratanteCurp": "LORA900131MDF",
			"contratanteEmail": "ana@example.mx",
			"contratanteCelular": "5512345678",
			"contratanteDomicilio": "Av. Reforma 100, CDMX",
			"certificadosDetalle": [{
				"tipo": "E",
				"tipoIdentificacion": "SERIE",
				"numeroIdentificacion": "SN-4411",
				"nombre": "Ana Lopez",
				"sexo": "F",
				"etiquetaAdicional1": "COLOR",
				"datoAdicional1": "NEGRO",
				"etiquetaAdicional2": "MEMORIA",
				"datoAdicional2": "256GB",
				"etiquetaAdicional3": "GARANTIA",
				"datoAdicional3": "12 MESES",
				"objetoAsegurado": "TELEFONO",
				"fechaCompra": "2026-03-14",
				"marca": "ACME",
				"modelo": "X1",
				"aseguradosAdicionales": null
			}]
		}]
	})
}

pub fn plan_request() -> PlanRequest {
	serde_json::from_value(plan_json()).expect("Plan fixture should deserialize.")
}
