//! Book routes
//!
//! Collection path `/api/books` serves list-and-create; item path
//! `/api/books/{id}` serves get-and-delete. Unmatched methods on either
//! path fall through to axum's 405 response.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::db::BookRepo;
use crate::http::error::{ApiError, ApiResult};
use crate::http::extractors::BookId;
use crate::http::server::AppState;
use crate::models::{Book, BookCreated};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/books",
            get(list_books).post(create_book).options(preflight),
        )
        .route(
            "/api/books/{id}",
            get(get_book).delete(delete_book).options(preflight),
        )
}

/// GET /api/books - the whole catalog as a JSON array.
async fn list_books(State(state): State<AppState>) -> ApiResult<Json<Vec<Book>>> {
    let books = BookRepo::new(&state.pool).fetch_all().await?;
    Ok(Json(books))
}

/// POST /api/books - insert a book with its caller-supplied id.
async fn create_book(
    State(state): State<AppState>,
    Json(book): Json<Book>,
) -> ApiResult<(StatusCode, Json<BookCreated>)> {
    let bookid = BookRepo::new(&state.pool).insert(&book).await?;
    Ok((StatusCode::CREATED, Json(BookCreated { bookid })))
}

/// GET /api/books/{id}
async fn get_book(State(state): State<AppState>, BookId(id): BookId) -> ApiResult<Json<Book>> {
    let book = BookRepo::new(&state.pool)
        .fetch_one(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "book",
            id: id.to_string(),
        })?;

    Ok(Json(book))
}

/// DELETE /api/books/{id} - 200 with empty body whether or not a row matched.
async fn delete_book(State(state): State<AppState>, BookId(id): BookId) -> ApiResult<StatusCode> {
    BookRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::OK)
}

/// OPTIONS on either path - 200 with empty body; the cross-origin
/// decorator supplies the headers preflight checks look for.
async fn preflight() -> StatusCode {
    StatusCode::OK
}
