//! Inbound HTTP surface.
//!
//! A thin axum router: each route deserializes its payload, hands it to the matching
//! [`Relay`] operation, and converts relay errors through [`ApiError`].

mod error;
mod handlers;

pub use error::ApiError;

// crates.io
use axum::{
	Router,
	routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
// self
use crate::{_prelude::*, flows::Relay, http::UpstreamHttpClient, settings::ServerSettings};

/// Default `RUST_LOG` directive when none is set.
pub const DEFAULT_LOG_FILTER: &str = "info,seguros_relay=debug,tower_http=debug";

/// Builds the relay router.
///
/// | method | path |
/// |---|---|
/// | POST | `/api/v1/cotizaciones/` |
/// | POST | `/api/v1/plans/` |
/// | GET | `/api/v1/plans/{id}` |
/// | GET | `/api/v1/utils/health-check/` |
pub fn router<C>(relay: Relay<C>) -> Router
where
	C: ?Sized + UpstreamHttpClient,
{
	Router::new()
		.route("/api/v1/cotizaciones/", post(handlers::quote::<C>))
		.route("/api/v1/plans/", post(handlers::create_plan::<C>))
		.route("/api/v1/plans/:id", get(handlers::fetch_plan::<C>))
		.route("/api/v1/utils/health-check/", get(handlers::health_check))
		.layer(TraceLayer::new_for_http())
		.with_state(relay)
}

/// Binds the listener and serves until Ctrl-C.
pub async fn serve<C>(relay: Relay<C>, settings: ServerSettings) -> Result<()>
where
	C: ?Sized + UpstreamHttpClient,
{
	let listener = tokio::net::TcpListener::bind(settings.bind_address).await?;

	tracing::info!(address = %settings.bind_address, "insurer relay listening");

	axum::serve(listener, router(relay)).with_graceful_shutdown(shutdown_signal()).await?;

	tracing::info!("insurer relay stopped");

	Ok(())
}

/// Installs the global `tracing` subscriber, honoring `RUST_LOG`.
///
/// Returns false when a subscriber was already installed.
pub fn init_tracing() -> bool {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

	tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init().is_ok()
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		tracing::error!(error = %e, "failed to listen for the shutdown signal");
	}
}
