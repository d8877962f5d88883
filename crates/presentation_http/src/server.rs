//! Serving with a bounded graceful shutdown

use std::{
    future::{Future, IntoFuture},
    time::Duration,
};

use axum::Router;
use tokio::{net::TcpListener, signal, sync::oneshot};
use tracing::{info, warn};

/// Serve `app` until `shutdown` resolves, then drain for at most `drain_timeout`
///
/// Connections still open when the deadline passes are dropped.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    drain_timeout: Duration,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (draining_tx, draining_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            let _ = draining_tx.send(());
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result,
        _ = draining_rx => {}
    }

    info!("⏳ Waiting up to {:?} for connections to close...", drain_timeout);

    if let Ok(result) = tokio::time::timeout(drain_timeout, server).await {
        result
    } else {
        warn!(?drain_timeout, "Shutdown timeout reached, dropping open connections");
        Ok(())
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
