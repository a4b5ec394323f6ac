//! Database layer - connection pool and the book repository
//!
//! # Design Principles
//!
//! - Bounded connection pool (max 10, 3-minute lifetime) - no global handle
//! - Every statement runs under a fixed 3-second deadline
//! - Rely on the primary key for uniqueness - no check-then-insert

pub mod books;
pub mod pool;

pub use books::{BookRepo, DbError};
pub use pool::{create_pool, ensure_schema};
