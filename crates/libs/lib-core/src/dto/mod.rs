//! # Data Transfer Objects
//!
//! Request and response structures for the HTTP surface. All DTOs use
//! snake_case field names in JSON (default serde behavior).

pub mod auth;
pub mod people;

pub use auth::{LoginRequest, SignupRequest, TokenResponse, UserInfo};
pub use people::{PersonCreateRequest, PersonUpdateRequest};
