//! Health check endpoint.

use axum::Json;

use crate::dto::HealthResponse;
use crate::error::ApiError;

/// Health check endpoint.
///
/// Returns the server health status and version.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health_check() -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
