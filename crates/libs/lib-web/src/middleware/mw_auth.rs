//! # Authentication Middleware
//!
//! Guard applied in front of every protected route. Per request the flow is
//! a small state machine: no token -> token present -> verified claims, with
//! two distinct rejection outcomes:
//!
//! - missing or malformed `Authorization` header -> 401 `Unauthenticated`
//! - token present but invalid/expired/forged -> 403 `Forbidden`
//!
//! On success the decoded [`Claims`] are inserted into request extensions,
//! so handlers extract them with `Extension<Claims>`.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use lib_auth::decode_jwt;
use lib_core::{AppError, Config};
use tracing::{debug, warn};

/// Validate the bearer token and inject the caller's claims.
///
/// The JWT secret comes from the injected [`Config`] state, not from any
/// global.
pub async fn require_auth(
    State(config): State<Config>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            warn!("[AUTH] Missing Authorization header");
            AppError::Unauthenticated
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("[AUTH] Authorization header is not a bearer token");
        AppError::Unauthenticated
    })?;

    let claims = decode_jwt(token, &config.jwt_secret).map_err(|e| {
        warn!("[AUTH] Token validation failed: {}", e);
        AppError::Forbidden
    })?;

    debug!(
        "[AUTH] Authenticated user: {} (id: {})",
        claims.username, claims.sub
    );

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
