//! Quotation payloads (`cotizaciones`).

// self
use crate::_prelude::*;

/// Quotation request (`RequestCotizacion`) forwarded to the quotations endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuotationRequest {
	/// Agreement identifier.
	#[validate(length(min = 10))]
	pub id_convenio: String,
	/// Branch key.
	#[validate(length(min = 1, max = 10))]
	pub suc_clave: String,
	/// Branch name.
	#[validate(length(min = 1))]
	pub suc_nombre: String,
	/// Distributor key.
	#[validate(length(min = 1))]
	pub distribuidor_clave: String,
	/// Distributor name.
	#[validate(length(min = 1))]
	pub distribuidor_nombre: String,
	/// Distributor contact email.
	#[validate(email, length(max = 255))]
	pub distribuidor_email: String,
	/// Requested quotations.
	#[validate(nested)]
	pub cotizaciones: Vec<Quotation>,
}

/// One commercial plan to quote (`Cotizaciones`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
	/// Commercial plan code.
	pub plan_comercial: String,
	/// Per-insured quotation lines.
	#[validate(nested)]
	pub det_solicitudes: Vec<QuotationDetail>,
}

/// Quotation line (`DetSolicitudes`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuotationDetail {
	/// Plan code.
	pub plan: String,
	/// Renewal counter.
	pub renovacion: i64,
	/// Line type.
	pub tipo: String,
	/// Package code.
	pub paquete: String,
	/// Insured's birth date as sent by the caller.
	pub fecha_nacimiento: String,
	/// Reported coverage start.
	pub ini_vig_reportada: String,
	/// Reported coverage end; empty when open-ended.
	#[serde(default)]
	pub fin_vig_reportada: String,
	/// Reported term.
	pub plazo_reportado: i64,
	/// Term type.
	pub tipo_vig: i64,
	/// Sum insured, bucket 4.
	pub sum_aseg4: f64,
	/// Sum insured, bucket 5.
	pub sum_aseg5: f64,
	/// Net premium coverages; the insurer expects an empty list on request.
	#[serde(default)]
	pub coberturas_prima_neta: Vec<Value>,
}
