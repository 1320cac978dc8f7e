//! Password Generator - random password service with a partitioned read cache
//!
//! Generates passwords for a length and complexity tier, stores them hashed
//! with owner and tag metadata, and serves lookups cache-first.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod service;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use error::{PasswordError, Result};
pub use service::PasswordService;
