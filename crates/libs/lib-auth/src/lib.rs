//! # Authentication Library
//!
//! Password hashing and JWT token management.

pub mod error;
pub mod pwd;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use pwd::{hash_password, verify_password, DEFAULT_COST};
pub use token::{encode_jwt, decode_jwt, Claims};
