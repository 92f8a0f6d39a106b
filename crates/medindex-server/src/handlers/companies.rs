//! Companies directory endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::dto::{CompanyListResponse, PageQuery, StatusMessage, page_params};
use crate::error::ApiError;
use crate::state::AppState;

/// List all companies.
///
/// Serves the full collection in id order with in-memory pagination.
#[utoipa::path(
    get,
    path = "/api/v2/medicine/company",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of the companies directory", body = CompanyListResponse),
        (status = 500, description = "Internal server error", body = StatusMessage),
    ),
    tag = "companies"
)]
pub async fn list_companies(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<CompanyListResponse>, ApiError> {
    let page = page_params(params.page.as_deref(), params.limit.as_deref());
    let result = state
        .catalog
        .company_directory(page)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(CompanyListResponse::from(result)))
}
