//! # Password Hashing
//!
//! Salted one-way password hashing with bcrypt. The cost factor is caller
//! supplied so it can come from configuration; [`DEFAULT_COST`] matches the
//! usual production setting.
//!
//! bcrypt work is CPU-bound. Callers on an async runtime should run these
//! functions on a blocking thread (`tokio::task::spawn_blocking`).

use crate::error::AuthError;

/// Default bcrypt cost factor (2^10 rounds).
pub const DEFAULT_COST: u32 = 10;

/// Hash a password with bcrypt using a per-record random salt.
///
/// Any non-empty password is accepted; length policy belongs to callers.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    bcrypt::hash(password, cost).map_err(|e| AuthError::Hash(e.to_string()))
}

/// Verify a plaintext password against a stored bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    bcrypt::verify(password, hash).map_err(|e| AuthError::InvalidHash(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing() {
        let password = "TestPassword123!";
        let hash = hash_password(password, DEFAULT_COST)
            .expect("Password hashing should succeed for valid password");

        assert!(verify_password(password, &hash)
            .expect("Password verification should succeed for correct password"));
        assert!(!verify_password("WrongPassword", &hash)
            .expect("Password verification should fail for incorrect password"));
    }

    #[test]
    fn test_short_password_is_hashed() {
        let hash = hash_password("pw1", DEFAULT_COST).expect("short passwords are accepted");

        assert!(verify_password("pw1", &hash).expect("verification should succeed"));
    }

    #[test]
    fn test_cost_factor_is_recorded_in_hash() {
        let hash = hash_password("LongEnoughPassword", 6)
            .expect("Password hashing should succeed");

        // bcrypt hashes embed the cost: $2b$06$...
        assert!(hash.contains("$06$"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("SamePassword1", DEFAULT_COST).expect("hash should succeed");
        let b = hash_password("SamePassword1", DEFAULT_COST).expect("hash should succeed");

        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_garbage_hash() {
        let result = verify_password("whatever", "not-a-bcrypt-hash");

        assert!(matches!(result, Err(AuthError::InvalidHash(_))));
    }
}
