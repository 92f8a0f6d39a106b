//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::dto::{
    BrandDetailResponse, BrandDto, BrandListQuery, BrandListResponse, CompanyDto,
    CompanyListResponse, GenericDetailsDto, GenericListResponse, GenericSummaryDto,
    HealthResponse, IdPageQuery, MedicineDto, PageQuery, StatusMessage, SymptomQuery,
};
use crate::handlers::{companies, generics, health, medicines};

/// OpenAPI documentation for the medindex API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Medindex API",
        version = "1.0.0",
        description = "Read-only lookup service over a medicine reference catalog.

Medindex serves denormalized brand records joined with their manufacturer
and generic identity, queryable by brand name, symptom, generic id, or
company id.

## Quick Start

1. Check server health: `GET /health`
2. Search brands by name: `GET /api/v2/medicine?medicineName=napa`
3. Search by symptom: `GET /api/v2/medicine/search?symptom=allergy`
",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        health::health_check,
        medicines::list_medicines,
        medicines::search_by_generic,
        medicines::search_by_company,
        medicines::get_medicine_details,
        generics::search_by_symptom,
        generics::list_generics,
        companies::list_companies,
    ),
    components(
        schemas(
            // Request types
            BrandListQuery,
            SymptomQuery,
            PageQuery,
            IdPageQuery,
            // Response types
            HealthResponse,
            StatusMessage,
            MedicineDto,
            GenericDetailsDto,
            GenericSummaryDto,
            CompanyDto,
            BrandDto,
            BrandListResponse,
            BrandDetailResponse,
            GenericListResponse,
            CompanyListResponse,
        )
    ),
    tags(
        (name = "system", description = "System health"),
        (name = "medicines", description = "Brand search and detail"),
        (name = "generics", description = "Symptom search and generics directory"),
        (name = "companies", description = "Companies directory"),
    )
)]
pub struct ApiDoc;
