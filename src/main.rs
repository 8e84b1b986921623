//! Payroll API server.
//!
//! Loads configuration from `PAYROLL_CONFIG_DIR` (default `./config/default`)
//! and serves the payroll API on the configured bind address.

use tracing::info;
use tracing_subscriber::EnvFilter;

use ghana_payroll::api::{AppState, create_router};
use ghana_payroll::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting payroll API server");

    let config = ConfigLoader::from_env()?;
    let bind_address = config.server().bind_address.clone();

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!(address = %bind_address, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=ghana_payroll=trace` - Show trace for this crate only
/// - Default: `ghana_payroll=info`
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ghana_payroll=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
