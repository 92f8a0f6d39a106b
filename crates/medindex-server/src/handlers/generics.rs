//! Generic endpoints: symptom search and the generics directory.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::dto::{
    BrandListResponse, GenericListResponse, PageQuery, StatusMessage, SymptomQuery, page_params,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Search brands by symptom.
///
/// Matches generics whose indication list contains the symptom
/// case-insensitively, ranks generics with more indications first, and joins
/// each match back to a representative brand.
#[utoipa::path(
    get,
    path = "/api/v2/medicine/search",
    params(SymptomQuery),
    responses(
        (status = 200, description = "Ranked page of brands", body = BrandListResponse),
        (status = 500, description = "Internal server error", body = StatusMessage),
    ),
    tag = "generics"
)]
pub async fn search_by_symptom(
    State(state): State<AppState>,
    Query(params): Query<SymptomQuery>,
) -> Result<Json<BrandListResponse>, ApiError> {
    let page = page_params(params.page.as_deref(), params.limit.as_deref());
    let result = state
        .catalog
        .symptom_search(params.symptom.as_deref(), page)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(BrandListResponse::from(result)))
}

/// List all generics.
///
/// Serves the full collection in id order with in-memory pagination; rows
/// carry the reduced directory projection.
#[utoipa::path(
    get,
    path = "/api/v2/medicine/generic",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of the generics directory", body = GenericListResponse),
        (status = 500, description = "Internal server error", body = StatusMessage),
    ),
    tag = "generics"
)]
pub async fn list_generics(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<GenericListResponse>, ApiError> {
    let page = page_params(params.page.as_deref(), params.limit.as_deref());
    let result = state
        .catalog
        .generic_directory(page)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(GenericListResponse::from(result)))
}
