// ABOUTME: Request ID middleware for correlation and structured logging
// ABOUTME: Generates a UUID per request and echoes it on the response headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalia Health

use crate::constants::headers;
use axum::{extract::Request, middleware::Next, response::Response};
use http::{HeaderName, HeaderValue};
use uuid::Uuid;

/// Correlation ID that flows through the request lifecycle
///
/// Handlers can read it from request extensions; the middleware also echoes
/// it back on the response so clients and logs can be correlated.
#[derive(Debug, Clone)]
pub struct RequestId(String);

impl RequestId {
    /// The ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Attach a request ID to every request
///
/// A client-supplied `x-request-id` header is honored; otherwise a fresh
/// UUID is generated. The ID is stored in request extensions and set on the
/// response headers.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(headers::REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), ToOwned::to_owned);

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(headers::REQUEST_ID), value);
    }

    response
}
