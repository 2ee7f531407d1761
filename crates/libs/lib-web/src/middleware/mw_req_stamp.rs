//! # Request Stamping Middleware
//!
//! Generates a unique request ID per request and exposes it in request
//! extensions and the `X-Request-ID` response header, so log lines can be
//! correlated across the handler chain.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::SystemTime;
use uuid::Uuid;

/// Request metadata for tracing and debugging.
#[derive(Clone, Debug)]
pub struct RequestStamp {
    /// Unique request identifier
    pub id: String,
    /// Request timestamp
    pub timestamp: SystemTime,
}

impl RequestStamp {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: SystemTime::now(),
        }
    }
}

/// Stamp each request with an ID, available to handlers via
/// `Extension<RequestStamp>` and echoed back in `X-Request-ID`.
pub async fn stamp_req(mut req: Request, next: Next) -> Response {
    let stamp = RequestStamp::new();

    req.extensions_mut().insert(stamp.clone());

    let mut res = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(&stamp.id) {
        res.headers_mut().insert("X-Request-ID", header_value);
    }

    res
}
