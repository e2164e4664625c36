// ABOUTME: Application constants organized by domain
// ABOUTME: Holds service identifiers, network defaults, and header names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalia Health

//! Constants module
//!
//! Application-wide constants grouped by domain. Anything configurable at
//! runtime lives in [`crate::config`] instead; only fixed identifiers and
//! defaults belong here.

/// Service identifiers used in logs and health payloads
pub mod service_names {
    /// Canonical service name for the wellness metrics server
    pub const VITALIA_WELLNESS_SERVER: &str = "vitalia-wellness-server";
}

/// Network defaults applied when the environment provides no override
pub mod defaults {
    /// Default HTTP API port
    pub const HTTP_PORT: u16 = 8081;

    /// Default bind host
    pub const HOST: &str = "127.0.0.1";
}

/// HTTP header names used across middleware and handlers
pub mod headers {
    /// Request correlation ID header
    pub const REQUEST_ID: &str = "x-request-id";
}
