//! Plan issuance payloads (`emisiones`).

// self
use crate::_prelude::*;

/// Plan issuance request (`PlanRequest`) forwarded to the issuances endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
	/// Agreement identifier.
	#[validate(length(min = 10))]
	pub id_convenio: String,
	/// Branch key.
	#[validate(length(min = 3))]
	pub suc_clave: String,
	/// Branch name.
	#[validate(length(min = 5))]
	pub suc_nombre: String,
	/// Distributor key.
	#[validate(length(min = 3))]
	pub distribuidor_clave: String,
	/// Distributor name.
	#[validate(length(min = 2))]
	pub distribuidor_nombre: String,
	/// Distributor contact email.
	#[validate(email, length(max = 255))]
	pub distribuidor_email: String,
	/// Certificates to issue.
	#[validate(nested)]
	pub certificados: Vec<Certificate>,
}

/// Policy certificate (`Certificados`), one per contracting party.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
	/// Tracking identifier of the quotation being issued.
	#[validate(length(min = 10))]
	pub id_track_cotizacion: String,
	/// Subsidiary RFC.
	#[validate(length(min = 5))]
	pub filial_rfc: String,
	/// Contracting party's full name.
	#[validate(length(min = 10))]
	pub contratante_nombre: String,
	/// Contracting party's RFC.
	#[validate(length(min = 10))]
	pub contratante_rfc: String,
	/// Tax regime code.
	#[validate(length(min = 1))]
	pub contratante_regimen_fiscal: String,
	/// CFDI usage code.
	#[validate(length(min = 2))]
	pub contratante_uso_cfdi: String,
	/// Postal code.
	#[validate(length(min = 4))]
	pub contratante_codigo_postal: String,
	/// Payment reference.
	#[validate(length(min = 10))]
	pub referencia_de_pago: String,
	/// Payment transaction identifier.
	#[validate(length(min = 10))]
	pub transaccion_de_pago: String,
	/// Contracting party's CURP.
	#[validate(length(min = 10))]
	pub contratante_curp: String,
	/// Contracting party's email.
	#[validate(email, length(max = 255))]
	pub contratante_email: String,
	/// Contracting party's mobile number.
	#[validate(length(min = 5))]
	pub contratante_celular: String,
	/// Contracting party's address.
	#[validate(length(min = 10))]
	pub contratante_domicilio: String,
	/// Insured objects covered by the certificate.
	#[validate(nested)]
	pub certificados_detalle: Vec<CertificateDetail>,
}

/// Insured object line (`certificadosDetalle`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDetail {
	/// Line type.
	#[validate(length(min = 1))]
	pub tipo: String,
	/// Identification type.
	#[validate(length(min = 5))]
	pub tipo_identificacion: String,
	/// Identification number.
	#[validate(length(min = 1))]
	pub numero_identificacion: String,
	/// Name.
	#[validate(length(min = 5))]
	pub nombre: String,
	/// Sex.
	#[validate(length(min = 1))]
	pub sexo: String,
	/// Label for the first extra attribute.
	#[validate(length(min = 5))]
	pub etiqueta_adicional1: String,
	/// Value of the first extra attribute.
	#[validate(length(min = 5))]
	pub dato_adicional1: String,
	/// Label for the second extra attribute.
	#[validate(length(min = 5))]
	pub etiqueta_adicional2: String,
	/// Value of the second extra attribute.
	#[validate(length(min = 5))]
	pub dato_adicional2: String,
	/// Label for the third extra attribute.
	#[validate(length(min = 5))]
	pub etiqueta_adicional3: String,
	/// Value of the third extra attribute.
	#[validate(length(min = 5))]
	pub dato_adicional3: String,
	/// Insured object description.
	#[validate(length(min = 5))]
	pub objeto_asegurado: String,
	/// Purchase date.
	#[validate(length(min = 10))]
	pub fecha_compra: String,
	/// Brand.
	#[validate(length(min = 2))]
	pub marca: String,
	/// Model.
	#[validate(length(min = 2))]
	pub modelo: String,
	/// Additional insured people; sent as `null` when absent.
	#[serde(default)]
	#[validate(nested)]
	pub asegurados_adicionales: Option<Vec<AdditionalInsured>>,
}

/// Additional insured person (`AseguradosAdicionales`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalInsured {
	/// Relationship to the contracting party.
	#[validate(length(min = 2))]
	pub parentesco: String,
	/// Identification type.
	#[validate(length(min = 2))]
	pub tipo_identificacion: String,
	/// Identification number.
	#[validate(length(min = 5))]
	pub numero_identificacion: String,
	/// Name.
	#[validate(length(min = 5))]
	pub nombre: String,
	/// Birth date; optional and unchecked for additional insureds.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fecha_nacimiento: Option<String>,
	/// Sex; optional and unchecked for additional insureds.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sexo: Option<String>,
	/// Age in years.
	pub edad: i64,
}
