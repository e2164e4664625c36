// ABOUTME: Server binary for the Vitalia wellness metrics API
// ABOUTME: Loads environment configuration, initializes logging, and serves the calculator endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalia Health

//! # Vitalia Wellness Server Binary
//!
//! Starts the health metrics calculator API with environment-based
//! configuration and structured logging.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use vitalia_wellness_server::{config::environment::ServerConfig, logging, server};

#[derive(Parser)]
#[command(name = "vitalia-wellness-server")]
#[command(about = "Vitalia Wellness API - health metrics calculator service")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Vitalia Wellness Server");
    info!("{}", config.summary());

    server::run(config).await
}
