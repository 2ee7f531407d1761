//! # Web Library
//!
//! HTTP handlers, middleware, router construction, and server startup.

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{create_router, start_server, AppState, ServerConfig};
