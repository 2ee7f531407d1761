//! # Authentication Handlers
//!
//! HTTP request handlers for the public authentication endpoints:
//!
//! - `POST /signup` — create a user from a username/password pair
//! - `POST /login` — exchange a username/password pair for a bearer token
//!
//! Password hashing and verification are CPU-bound (bcrypt), so both run on
//! the blocking thread pool to keep the event loop responsive.
//!
//! Login intentionally reports a missing user and a wrong password with the
//! very same error, so the endpoint cannot be used to enumerate usernames.
//! Plaintext passwords are never logged.

use axum::extract::{Json, State};
use lib_auth::{encode_jwt, hash_password, verify_password};
use lib_core::{
    dto::{LoginRequest, SignupRequest, TokenResponse, UserInfo},
    model::store::UserRepository,
    AppError, Config, DbPool,
};
use tracing::{debug, info, warn};

/// Signup handler - creates a new user account.
pub async fn signup(
    State(pool): State<DbPool>,
    State(config): State<Config>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<UserInfo>, AppError> {
    info!("[SIGNUP] New user signup request");
    debug!("   Username: {}", req.username);

    if req.username.len() < 3 {
        warn!("[SIGNUP] Username too short");
        return Err(AppError::Validation(
            "Username must be at least 3 characters".to_string(),
        ));
    }

    // Pre-check for a friendlier error; the UNIQUE constraint still backs
    // this up if a concurrent signup slips through.
    if UserRepository::find_by_username(&pool, &req.username)
        .await?
        .is_some()
    {
        warn!("[SIGNUP] Username already taken: {}", req.username);
        return Err(AppError::DuplicateUsername(req.username));
    }

    debug!("[SIGNUP] Hashing password...");
    let cost = config.bcrypt_cost;
    let password = req.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password, cost))
        .await
        .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
        .map_err(|e| AppError::Internal(e.to_string()))?;

    debug!("[SIGNUP] Creating user in database...");
    let user = UserRepository::create(&pool, &req.username, &password_hash).await?;

    info!("[SIGNUP] User created: {} (id: {})", user.username, user.id);

    Ok(Json(UserInfo {
        id: user.id.to_string(),
        username: user.username,
        created_at: user.created_at.to_rfc3339(),
    }))
}

/// Login handler - authenticates an existing user and issues a token.
pub async fn login(
    State(pool): State<DbPool>,
    State(config): State<Config>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    info!("[LOGIN] Login attempt");
    debug!("   Username: {}", req.username);

    let user = match UserRepository::find_by_username(&pool, &req.username).await? {
        Some(user) => user,
        None => {
            warn!("[LOGIN] Rejected login for: {}", req.username);
            return Err(AppError::InvalidCredentials);
        }
    };

    debug!("[LOGIN] Verifying password...");
    let password = req.password;
    let stored_hash = user.password_hash.clone();
    let is_valid = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| AppError::Internal(format!("Verification task failed: {}", e)))?
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !is_valid {
        warn!("[LOGIN] Rejected login for: {}", req.username);
        return Err(AppError::InvalidCredentials);
    }

    debug!("[LOGIN] Generating token...");
    let token = encode_jwt(
        user.id,
        user.username.clone(),
        &config.jwt_secret,
        config.jwt_expiration_hours,
    )
    .map_err(|e| AppError::Internal(e.to_string()))?;

    info!("[LOGIN] User authenticated: {} (id: {})", user.username, user.id);

    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
mod tests;
