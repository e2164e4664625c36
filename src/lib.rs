// ABOUTME: Main library entry point for the Vitalia wellness metrics service
// ABOUTME: Provides health metric calculators exposed over a REST API boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalia Health

#![deny(unsafe_code)]

//! # Vitalia Wellness Server
//!
//! The health metrics calculator service of the Vitalia wellness platform.
//! It computes anthropometric metrics (BMI, total daily energy expenditure,
//! body fat percentage) from request data and serves them over a small JSON
//! REST API.
//!
//! ## Features
//!
//! - **BMI**: weight/height ratio with WHO category thresholds
//! - **TDEE**: Mifflin-St Jeor basal rate scaled by activity multipliers
//! - **Body fat**: US Navy circumference method with per-gender categories
//! - **Stateless evaluation**: every request is a single pure computation;
//!   nothing is persisted and no state is shared between requests
//!
//! ## Architecture
//!
//! - **Calculators**: pure formula evaluation with ordered category tables
//! - **Routes**: thin axum handlers that validate field presence, delegate to
//!   a calculator, and wrap the result in the `{success, data}` envelope
//! - **Middleware**: CORS, request IDs, and HTTP tracing
//! - **Config**: environment-variable driven server configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vitalia_wellness_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load configuration
//!     let config = ServerConfig::from_env()?;
//!
//!     println!("Vitalia wellness server configured with port: HTTP={}",
//!              config.http_port);
//!
//!     Ok(())
//! }
//! ```

/// Health metric calculators (BMI, TDEE, body fat percentage)
pub mod calculators;

/// Configuration management for deployment environments
pub mod config;

/// Application constants and service identifiers
pub mod constants;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for CORS and request correlation
pub mod middleware;

/// `HTTP` routes for calculator endpoints and service probes
pub mod routes;

/// HTTP server assembly and lifecycle
pub mod server;
