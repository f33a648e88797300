// crates.io
use axum::{
	Json,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use validator::{ValidationErrors, ValidationErrorsKind};
// self
use crate::_prelude::*;

/// HTTP rendering of a relay [`Error`].
///
/// | error | status |
/// |---|---|
/// | validation | 422 |
/// | upstream, transport | 502 |
/// | config, I/O | 500 |
///
/// Upstream failures embed the insurer's raw body under `upstream`.
#[derive(Debug)]
pub struct ApiError(pub Error);
impl ApiError {
	/// Status code this error renders with.
	pub fn status(&self) -> StatusCode {
		match &self.0 {
			Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
			Error::Upstream(_) | Error::Transport(_) => StatusCode::BAD_GATEWAY,
			Error::Config(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}
impl From<Error> for ApiError {
	fn from(e: Error) -> Self {
		Self(e)
	}
}
impl Display for ApiError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		Display::fmt(&self.0, f)
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let status = self.status();
		let body = match &self.0 {
			Error::Validation(errors) => json!({ "detail": validation_detail(errors) }),
			Error::Upstream(err) => json!({
				"detail": err.to_string(),
				"call": err.call().as_str(),
				"status": err.status(),
				"upstream": err.body(),
			}),
			other => json!({ "detail": other.to_string() }),
		};

		if status.is_server_error() {
			tracing::error!(status = status.as_u16(), error = ?self.0, "relay request failed");
		} else {
			tracing::debug!(status = status.as_u16(), error = %self.0, "relay request rejected");
		}

		(status, Json(body)).into_response()
	}
}

/// Renders validation failures keyed by the camelCase names callers send.
fn validation_detail(errors: &ValidationErrors) -> Value {
	let fields = errors
		.errors()
		.iter()
		.map(|(name, kind)| {
			let detail = match kind {
				ValidationErrorsKind::Field(failures) =>
					serde_json::to_value(failures).unwrap_or_default(),
				ValidationErrorsKind::Struct(nested) => validation_detail(nested),
				ValidationErrorsKind::List(items) => Value::Object(
					items
						.iter()
						.map(|(index, nested)| (index.to_string(), validation_detail(nested)))
						.collect(),
				),
			};

			(wire_name(name), detail)
		})
		.collect();

	Value::Object(fields)
}

fn wire_name(name: &str) -> String {
	let mut out = String::with_capacity(name.len());
	let mut upper = false;

	for c in name.chars() {
		if c == '_' {
			upper = true;
		} else if upper {
			out.extend(c.to_uppercase());
			upper = false;
		} else {
			out.push(c);
		}
	}

	out
}
