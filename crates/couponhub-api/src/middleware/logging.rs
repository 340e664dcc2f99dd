//! Per-request access log.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Emits one event per request with status and latency.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::warn!(%method, path = uri.path(), status = status.as_u16(), elapsed_ms, "request failed");
    } else {
        tracing::info!(%method, path = uri.path(), status = status.as_u16(), elapsed_ms, "request served");
    }

    response
}
