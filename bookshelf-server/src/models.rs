//! Domain model for the catalog
//!
//! A book identifier is caller-supplied; uniqueness comes from the
//! table primary key, not from application logic.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// Response body for a successful insert.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookCreated {
    pub bookid: i64,
}
