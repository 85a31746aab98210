//! Fleet management API server.
//!
//! Wires tracing, the storage-backed application state, the router and the
//! middleware stack, then serves until interrupted.

use anyhow::Context;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use fleet_management_api::middleware::create_cors_layer;
use fleet_management_api::routes::{AppState, create_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG controls verbosity; default is info.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Connects to PostgreSQL and migrates when DATABASE_URL is set,
    // otherwise runs on the in-memory store.
    let state = AppState::from_env()
        .await
        .context("failed to initialize storage")?;

    let app = create_app(state.clone()).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(create_cors_layer()),
    );

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    state.close().await;
    info!("server shutdown complete");
    Ok(())
}

/// Resolves on SIGINT, and on SIGTERM where available, so container stops
/// drain in-flight requests before the storage handle is closed.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
                info!("SIGINT received, shutting down");
                return;
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => info!("SIGINT received, shutting down"),
            _ = sigterm.recv() => info!("SIGTERM received, shutting down"),
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        info!("shutdown signal received");
    }
}
