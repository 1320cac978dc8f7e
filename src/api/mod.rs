//! API Module
//!
//! HTTP handlers and routing for the password REST API.
//!
//! # Endpoints
//! - `GET /api/passwords/generate` - Generate and store a password
//! - `GET /api/passwords` - List all stored passwords
//! - `GET /api/passwords/:id` - Fetch one stored password
//! - `POST /api/passwords` - Store a password
//! - `PUT /api/passwords/:id` - Replace a stored password
//! - `DELETE /api/passwords/:id` - Delete a stored password
//! - `GET /api/passwords/by-tag` - List passwords carrying a tag
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
