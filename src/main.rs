//! Insurer relay server.
//!
//! Reads `API_*` settings and `RELAY_BIND_ADDRESS` from the environment, then serves the
//! relay router until Ctrl-C.

// self
use seguros_relay::{
	api,
	error::Result,
	flows::Relay,
	settings::{RelaySettings, ServerSettings},
};

#[tokio::main]
async fn main() -> Result<()> {
	api::init_tracing();

	let settings = RelaySettings::from_env()?;
	let server = ServerSettings::from_env()?;

	tracing::info!(endpoints = ?settings.endpoints, "insurer relay configured");

	api::serve(Relay::new(settings), server).await
}
