//! Shared helpers for forwarding flows (dispatch, JSON decoding, field checks).

// self
use crate::{
	_prelude::*,
	error::UpstreamError,
	flows::Relay,
	http::{UpstreamHttpClient, UpstreamRequest, UpstreamResponse},
	obs::{self, CallOutcome, CallSpan, RelayCall},
};

/// Returns false for the values the insurer uses to mean "nothing here":
/// `null`, `false`, `0`, `""`, `[]`, and `{}`.
pub fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
		Value::String(text) => !text.is_empty(),
		Value::Array(items) => !items.is_empty(),
		Value::Object(map) => !map.is_empty(),
	}
}

/// Wraps an operation with a call span and attempt/success/failure counters.
pub(crate) async fn observe<T, Fut>(call: RelayCall, stage: &'static str, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = CallSpan::new(call, stage);

	obs::record_call_outcome(call, CallOutcome::Attempt);

	let result = span.instrument(fut).await;

	match &result {
		Ok(_) => obs::record_call_outcome(call, CallOutcome::Success),
		Err(_) => obs::record_call_outcome(call, CallOutcome::Failure),
	}

	result
}

/// Executes one insurer call and decodes its JSON body, whatever the status.
pub(crate) async fn dispatch<C>(relay: &Relay<C>, request: UpstreamRequest) -> Result<(u16, Value)>
where
	C: ?Sized + UpstreamHttpClient,
{
	let call = request.call;
	let response = relay.http_client.execute(request).await?;

	obs::record_exchange(call, response.status);

	Ok(decode(call, response)?)
}

/// Parses a buffered response as JSON, keeping the path of any syntax failure.
pub(crate) fn decode(
	call: RelayCall,
	response: UpstreamResponse,
) -> Result<(u16, Value), UpstreamError> {
	let status = response.status;
	let mut deserializer = serde_json::Deserializer::from_slice(&response.body);
	let body = serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| UpstreamError::MalformedJson { call, status, source })?;

	Ok((status, body))
}

/// Extracts `field` from an object body; absent or falsy values fail with the raw body.
pub(crate) fn require_field(
	call: RelayCall,
	status: u16,
	mut body: Value,
	field: &'static str,
) -> Result<Value, UpstreamError> {
	if !body.get(field).is_some_and(is_truthy) {
		return Err(UpstreamError::MissingField { call, field, status, body });
	}

	Ok(body.get_mut(field).map(Value::take).unwrap_or_default())
}

/// Passes a whole body through unless it is falsy.
pub(crate) fn require_body(call: RelayCall, status: u16, body: Value) -> Result<Value, UpstreamError> {
	if is_truthy(&body) { Ok(body) } else { Err(UpstreamError::EmptyBody { call, status, body }) }
}

/// Renders a token value as header text; non-string scalars keep their JSON spelling.
pub(crate) fn token_text(value: Value) -> String {
	match value {
		Value::String(text) => text,
		other => other.to_string(),
	}
}
