//! bookshelf-server: HTTP service for a single-table book catalog
//!
//! Exposes create/read/delete over `books` rows as JSON, backed by a
//! bounded SQLite connection pool.

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, ServerConfig};
