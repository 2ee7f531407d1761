use thiserror::Error;

/// Errors produced by password hashing and token operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Failed to hash password: {0}")]
    Hash(String),

    #[error("Invalid password hash: {0}")]
    InvalidHash(String),

    #[error("Failed to encode token: {0}")]
    TokenEncode(String),

    #[error("Invalid or expired token: {0}")]
    TokenInvalid(String),
}
