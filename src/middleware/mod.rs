// ABOUTME: HTTP middleware for cross-cutting request concerns
// ABOUTME: Provides CORS configuration and request ID correlation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalia Health

//! HTTP middleware
//!
//! Cross-cutting layers applied to the whole router: CORS policy from
//! configuration and per-request correlation IDs.

/// CORS middleware configuration
pub mod cors;

/// Request ID generation and propagation
pub mod request_id;

pub use cors::setup_cors;
pub use request_id::{request_id_middleware, RequestId};
