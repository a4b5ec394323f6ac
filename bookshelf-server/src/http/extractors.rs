//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Extract a book identifier from the `{id}` route parameter.
///
/// Identifiers that do not parse as integers are treated as addressing
/// no resource at all, so the rejection is 404 rather than 400.
pub struct BookId(pub i64);

impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> =
            Path::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::NotFound {
                    resource: "book",
                    id: String::new(),
                })?;

        let id = raw.parse::<i64>().map_err(|_| ApiError::NotFound {
            resource: "book",
            id: raw,
        })?;

        Ok(Self(id))
    }
}
