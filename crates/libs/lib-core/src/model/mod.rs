//! # Data Model
//!
//! Entities and the database access layer.

pub mod store;
