// ABOUTME: HTTP server assembly and lifecycle management
// ABOUTME: Builds the merged router with middleware layers and serves it with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalia Health

//! HTTP server assembly
//!
//! Merges the domain routers, applies the middleware stack, and runs the
//! axum server until a shutdown signal arrives. The calculators are
//! stateless, so the router carries no shared application state.

use crate::{
    config::environment::ServerConfig,
    middleware::{request_id_middleware, setup_cors},
    routes::{CalculatorRoutes, HealthRoutes},
};
use anyhow::{Context, Result};
use axum::{middleware, Router};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Build the complete application router
#[must_use]
pub fn build_router(config: &ServerConfig) -> Router {
    Router::new()
        .merge(CalculatorRoutes::routes())
        .merge(HealthRoutes::routes())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(setup_cors(config))
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve the HTTP API until shutdown
///
/// # Errors
///
/// Returns an error if the listener cannot bind the configured address or
/// the server terminates abnormally.
pub async fn run(config: ServerConfig) -> Result<()> {
    let router = build_router(&config);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    info!("HTTP server listening on {bind_address}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")?;

    info!("Server shut down cleanly");
    Ok(())
}

/// Resolve when the process receives a shutdown signal
async fn shutdown_signal() {
    if let Err(signal_error) = tokio::signal::ctrl_c().await {
        error!("Failed to install shutdown signal handler: {signal_error}");
        return;
    }
    info!("Shutdown signal received, draining connections");
}
