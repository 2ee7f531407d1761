//! # Application Configuration
//!
//! Configuration is loaded from environment variables once at startup,
//! validated, and then passed around explicitly (injected via axum state).
//! There is no ambient global; anything that needs configuration takes a
//! `Config` or is handed one through `FromRef`.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// SQLite database connection URL
    pub database_url: String,

    /// Secret key for JWT token signing and verification.
    ///
    /// Must be at least 32 characters long.
    pub jwt_secret: String,

    /// Bearer token validity period in hours.
    ///
    /// After this period users must log in again.
    pub jwt_expiration_hours: i64,

    /// bcrypt cost factor used when hashing passwords at signup.
    pub bcrypt_cost: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:data/people.db".to_string());

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET must be set in environment")?;

        let jwt_expiration_hours = env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .map_err(|e| format!("JWT_EXPIRATION_HOURS must be a valid number: {}", e))?;

        let bcrypt_cost = env::var("BCRYPT_COST")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|e| format!("BCRYPT_COST must be a valid number: {}", e))?;

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_expiration_hours,
            bcrypt_cost,
        })
    }

    /// Validate configuration values against security rules.
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT_SECRET must be at least 32 characters long".to_string());
        }

        if self.jwt_expiration_hours < 1 || self.jwt_expiration_hours > 720 {
            return Err("JWT_EXPIRATION_HOURS must be between 1 and 720 (30 days)".to_string());
        }

        if self.bcrypt_cost < 4 || self.bcrypt_cost > 14 {
            return Err("BCRYPT_COST must be between 4 and 14".to_string());
        }

        Ok(())
    }
}
