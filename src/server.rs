//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream clients from [`Config`], assembles the router, and runs
//! Axum until a shutdown signal arrives.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::AssetPublisher;
use crate::infrastructure::github::{DisabledPublisher, GithubContentsPublisher};
use crate::infrastructure::http::build_client;
use crate::infrastructure::shortener::HttpLinkShortener;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::qr::QrRenderer;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the link service and its upstream clients.
///
/// Uploads go to GitHub when a token is configured; otherwise a
/// [`DisabledPublisher`] is installed.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn build_link_service(config: &Config) -> Result<LinkService> {
    let client = build_client(Duration::from_secs(config.upstream_timeout_secs))
        .context("Failed to build HTTP client")?;

    let publisher: Arc<dyn AssetPublisher> = if let Some(github) = &config.github {
        tracing::info!("Uploads enabled ({})", github.repo);
        Arc::new(GithubContentsPublisher::new(client.clone(), github.clone()))
    } else {
        tracing::warn!("GITHUB_TOKEN not set, uploads disabled");
        Arc::new(DisabledPublisher::new())
    };

    let shortener = Arc::new(HttpLinkShortener::new(client, config.shortener_url.clone()));
    let qr = QrRenderer::new(config.qr_service_url.clone(), config.qr_size);

    Ok(LinkService::new(publisher, shortener, qr))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - The listen address is invalid or the bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let link_service = build_link_service(&config)?;
    let state = AppState::new(Arc::new(link_service), config.max_upload_bytes);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
