// ABOUTME: Router assembly and HTTP serve loop with graceful shutdown
// ABOUTME: Merges domain routes, adds tracing and CORS layers, and serves the 404 fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

//! # HTTP Server
//!
//! [`build_router`] is what integration tests drive; [`run`] binds it to the
//! configured address.

use crate::middleware::setup_cors;
use crate::render::not_found_page;
use crate::resources::ServerResources;
use crate::routes::{EditorRoutes, HealthRoutes, UsageMeterRoutes};
use anyhow::{Context, Result};
use axum::{http::StatusCode, response::Html, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);
    let not_found = not_found_page(&resources.config.links.browse);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(EditorRoutes::routes(Arc::clone(&resources)))
        .merge(UsageMeterRoutes::routes(resources))
        .fallback(move || {
            let page = not_found.clone();
            async move { (StatusCode::NOT_FOUND, Html(page)) }
        })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Serve the router until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let addr = SocketAddr::new(resources.config.http_host, resources.config.http_port);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;

    info!("HTTP server listening on http://{addr}");
    info!("  GET /editor/:id");
    info!("  GET /widgets/usage-meter");
    info!("  GET /api/usage-meter");
    info!("  GET /health, /ready");

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
