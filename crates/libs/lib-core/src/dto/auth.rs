//! # Authentication DTOs
//!
//! - `POST /signup` — [`SignupRequest`] -> [`UserInfo`]
//! - `POST /login` — [`LoginRequest`] -> [`TokenResponse`]
//!
//! The signup response carries only public fields. Neither the plaintext
//! password nor the stored hash ever appears in a response body.

use serde::{Deserialize, Serialize};

/// Request body for `POST /signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public view of a user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub created_at: String,
}

/// Response body for a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
