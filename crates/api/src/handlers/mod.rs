pub mod project;

use axum::http::StatusCode;
use axum::Json;

use crate::response::ApiResponse;

/// Fallback for unmatched routes, so even a 404 carries the envelope.
pub async fn route_not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::failure("Route not found")),
    )
}
