//! Veloroute HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use infrastructure::{AppConfig, ProviderProxy, init_logging};
use presentation_http::{cors_layer, routes, server, state::AppState};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?;

    init_logging(config.server.log_format)?;
    info!("🚲 Veloroute v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(problems) = config.validate() {
        for problem in &problems {
            warn!(%problem, "Configuration problem");
        }
        anyhow::bail!("Invalid configuration ({} problems)", problems.len());
    }

    let proxy = ProviderProxy::from_config(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize providers: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        cache_enabled = proxy.is_caching_enabled(),
        cache_ttl_secs = config.cache.ttl_secs,
        distance_method = %config.itinerary.distance_method,
        "Configuration loaded"
    );
    let state = AppState::from_proxy(Arc::new(proxy), &config);

    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server.allowed_origins));

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    server::serve_with_shutdown(listener, app, server::shutdown_signal(), shutdown_timeout).await?;

    info!("👋 Server shutdown complete");

    Ok(())
}
