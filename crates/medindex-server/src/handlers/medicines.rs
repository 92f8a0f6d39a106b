//! Brand endpoints: list/search, foreign-key searches, single-record detail.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::dto::{
    BrandDetailResponse, BrandListQuery, BrandListResponse, IdPageQuery, StatusMessage,
    page_params, parse_required_id,
};
use crate::error::ApiError;
use crate::state::AppState;

/// List brands, optionally filtered by name.
///
/// Matches the brand name case-insensitively as a substring and ranks
/// multi-word names first. Without `medicineName` every brand matches.
#[utoipa::path(
    get,
    path = "/api/v2/medicine",
    params(BrandListQuery),
    responses(
        (status = 200, description = "Ranked page of brands", body = BrandListResponse),
        (status = 500, description = "Internal server error", body = StatusMessage),
    ),
    tag = "medicines"
)]
pub async fn list_medicines(
    State(state): State<AppState>,
    Query(params): Query<BrandListQuery>,
) -> Result<Json<BrandListResponse>, ApiError> {
    let page = page_params(params.page.as_deref(), params.limit.as_deref());
    let result = state
        .catalog
        .brand_search(params.medicine_name.as_deref(), page)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(BrandListResponse::from(result)))
}

/// Brands referencing a generic.
#[utoipa::path(
    get,
    path = "/api/v2/medicine/searchByGeneric",
    params(IdPageQuery),
    responses(
        (status = 200, description = "Ranked page of brands", body = BrandListResponse),
        (status = 400, description = "Missing or non-numeric id", body = StatusMessage),
        (status = 500, description = "Internal server error", body = StatusMessage),
    ),
    tag = "medicines"
)]
pub async fn search_by_generic(
    State(state): State<AppState>,
    Query(params): Query<IdPageQuery>,
) -> Result<Json<BrandListResponse>, ApiError> {
    let generic_id = parse_required_id(params.id.as_deref())?;
    let page = page_params(params.page.as_deref(), params.limit.as_deref());
    let result = state
        .catalog
        .brands_by_generic(generic_id, page)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(BrandListResponse::from(result)))
}

/// Brands manufactured by a company.
#[utoipa::path(
    get,
    path = "/api/v2/medicine/searchByCompanyId",
    params(IdPageQuery),
    responses(
        (status = 200, description = "Ranked page of brands", body = BrandListResponse),
        (status = 400, description = "Missing or non-numeric id", body = StatusMessage),
        (status = 500, description = "Internal server error", body = StatusMessage),
    ),
    tag = "medicines"
)]
pub async fn search_by_company(
    State(state): State<AppState>,
    Query(params): Query<IdPageQuery>,
) -> Result<Json<BrandListResponse>, ApiError> {
    let company_id = parse_required_id(params.id.as_deref())?;
    let page = page_params(params.page.as_deref(), params.limit.as_deref());
    let result = state
        .catalog
        .brands_by_company(company_id, page)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(BrandListResponse::from(result)))
}

/// Get a brand by its unique identifier.
///
/// Returns the join-resolved brand, or 404 when no brand matches.
#[utoipa::path(
    get,
    path = "/api/v2/medicine/{brandId}",
    params(
        ("brandId" = i32, Path, description = "Unique brand identifier")
    ),
    responses(
        (status = 200, description = "Brand found", body = BrandDetailResponse),
        (status = 400, description = "Non-numeric brand id", body = StatusMessage),
        (status = 404, description = "Medicine not found", body = StatusMessage),
        (status = 500, description = "Internal server error", body = StatusMessage),
    ),
    tag = "medicines"
)]
pub async fn get_medicine_details(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
) -> Result<Json<BrandDetailResponse>, ApiError> {
    let brand_id = brand_id.parse::<i32>().map_err(|_| {
        ApiError::from(medindex_core::CatalogError::InvalidInput(format!(
            "brand id must be an integer, got \"{}\"",
            brand_id
        )))
    })?;

    let row = state
        .catalog
        .brand_details(brand_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Medicine not found".to_string()))?;

    Ok(Json(BrandDetailResponse::from(row)))
}
