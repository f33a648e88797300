//! Insurer relay that forwards quotation and policy-issuance requests to the insurer API,
//! acquiring a bearer token through a password grant followed by a refresh grant on every call.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

#[cfg(feature = "server")] pub mod api;
pub mod auth;
pub mod error;
pub mod flows;
pub mod http;
pub mod models;
pub mod obs;
pub mod settings;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Value, json};
	pub use thiserror::Error as ThisError;
	pub use url::Url;
	pub use validator::Validate;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, parking_lot as _, tower as _};
