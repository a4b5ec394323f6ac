//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS on every response
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod cors;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{run_server, AppState, ServerConfig};
