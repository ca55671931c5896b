//! Liveness endpoint.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. The store lives in process memory, so there is
/// nothing further to check.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
