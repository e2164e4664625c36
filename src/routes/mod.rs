// ABOUTME: Route module organization for the Vitalia wellness server HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handler functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalia Health

//! Route module for the Vitalia wellness server
//!
//! This module organizes all HTTP routes by domain. Each domain module
//! contains only route definitions and thin handler functions that validate
//! field presence and delegate to the calculator layer.

/// Health metric calculator routes
pub mod calculators;

/// Health check and system status routes
pub mod health;

/// Calculator route handlers
pub use calculators::CalculatorRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
