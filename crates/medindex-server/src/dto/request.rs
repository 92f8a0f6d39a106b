//! Request DTOs for API endpoints.
//!
//! All query parameters arrive as optional strings and are parsed
//! defensively: page/limit coerce to defaults (see
//! `medindex_core::paging`), while typed identifiers are strict and reject
//! with 400 on non-numeric input.

use medindex_core::{CatalogError, PageParams};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;

/// Query parameters for the brand list/search endpoint.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct BrandListQuery {
    /// Case-insensitive substring of the brand name; absent matches all
    #[serde(rename = "medicineName")]
    #[param(example = "napa")]
    pub medicine_name: Option<String>,

    /// 1-based page number (default: 1)
    pub page: Option<String>,

    /// Page size, 1-20 (default: 10; oversized values reset to 10)
    pub limit: Option<String>,
}

/// Query parameters for the symptom search endpoint.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SymptomQuery {
    /// Case-insensitive substring of an indication; absent matches all
    #[param(example = "allergy")]
    pub symptom: Option<String>,

    /// 1-based page number (default: 1)
    pub page: Option<String>,

    /// Page size, 1-20 (default: 10; oversized values reset to 10)
    pub limit: Option<String>,
}

/// Plain pagination parameters for the directory endpoints.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct PageQuery {
    /// 1-based page number (default: 1)
    pub page: Option<String>,

    /// Page size, 1-20 (default: 10; oversized values reset to 10)
    pub limit: Option<String>,
}

/// Pagination plus a required numeric identifier.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct IdPageQuery {
    /// The generic or company identifier to filter by
    #[param(example = "123")]
    pub id: Option<String>,

    /// 1-based page number (default: 1)
    pub page: Option<String>,

    /// Page size, 1-20 (default: 10; oversized values reset to 10)
    pub limit: Option<String>,
}

/// Resolves pagination parameters from their raw query strings.
pub fn page_params(page: Option<&str>, limit: Option<&str>) -> PageParams {
    PageParams::from_raw(page, limit)
}

/// Parses a required identifier parameter, rejecting non-numeric input.
pub fn parse_required_id(raw: Option<&str>) -> Result<i32, ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            ApiError::from(CatalogError::InvalidInput(
                "id parameter is required".to_string(),
            ))
        })?;

    raw.parse::<i32>().map_err(|_| {
        ApiError::from(CatalogError::InvalidInput(format!(
            "id must be an integer, got \"{}\"",
            raw
        )))
    })
}
