//! # Middleware
//!
//! The guard pipeline around protected handlers is explicit: each request
//! passes the request stamp, then the auth guard, and only then reaches the
//! handler. A guard either continues the chain or terminates the request
//! with an error response.

// region:    --- Modules
pub mod mw_auth;
pub mod mw_req_stamp;
// endregion: --- Modules

// region:    --- Re-exports
pub use mw_auth::require_auth;
pub use mw_req_stamp::{stamp_req, RequestStamp};
// endregion: --- Re-exports
