//! Cross-origin decorator
//!
//! Every response, success or failure, carries the permissive CORS
//! headers so browser clients on other origins can call the API without
//! credentials. `tower_http::cors::CorsLayer` only emits the method and
//! header allow-lists on preflight responses, so the decorator is a
//! plain middleware instead.

use axum::extract::Request;
use axum::http::{header, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

const ALLOW_METHODS: &str = "POST, GET, OPTIONS, PUT, DELETE";
const ALLOW_HEADERS: &str =
    "Accept, Content-Type, Content-Length, Accept-Encoding, Origin, X-Requested-With";

/// Inject permissive CORS headers into every response.
pub async fn cross_origin(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );

    // The API only ever speaks JSON; empty-bodied responses (OPTIONS,
    // DELETE) declare it too.
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    response
}
