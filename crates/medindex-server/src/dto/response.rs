//! Response DTOs for API endpoints.
//!
//! Every list endpoint shares the `{status, details, total_count,
//! total_pages, current_page}` envelope; the single-record endpoint carries
//! only `status` and `details`; error bodies are [`StatusMessage`].

use serde::Serialize;
use utoipa::ToSchema;

use medindex_core::{
    CompanyRecord, DenormalizedBrand, GenericRecord, GenericSummary, MedicineRecord, PagedResult,
};

/// Body shape for every error and policy response.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusMessage {
    /// Always `false` for errors
    pub status: bool,
    /// Human-readable explanation
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("healthy")
    pub status: String,
    /// Server version
    pub version: String,
}

// =============================================================================
// Records
// =============================================================================

/// Brand fields as served to clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct MedicineDto {
    pub brand_id: i32,
    pub brand_name: String,
    pub form: String,
    pub generic_id: Option<i32>,
    pub company_id: i32,
    pub pack_size: String,
    pub price: String,
    pub strength: String,
}

impl From<MedicineRecord> for MedicineDto {
    fn from(r: MedicineRecord) -> Self {
        Self {
            brand_id: r.brand_id,
            brand_name: r.brand_name,
            form: r.form,
            generic_id: r.generic_id,
            company_id: r.company_id,
            pack_size: r.pack_size,
            price: r.price,
            strength: r.strength,
        }
    }
}

/// Full generic record attached to a denormalized brand.
#[derive(Debug, Serialize, ToSchema)]
pub struct GenericDetailsDto {
    pub generic_id: i32,
    pub generic_name: String,
    pub generic_name_bangla: String,
    pub indication: Vec<String>,
}

impl From<GenericRecord> for GenericDetailsDto {
    fn from(r: GenericRecord) -> Self {
        Self {
            generic_id: r.generic_id,
            generic_name: r.generic_name,
            generic_name_bangla: r.generic_name_bangla,
            indication: r.indication,
        }
    }
}

/// A denormalized brand row: the brand fields flattened at the top level
/// plus the joined company name and generic details.
///
/// The brand fields are absent only for symptom matches whose generic has no
/// marketed brand; `company_name` is `null` when the manufacturer is
/// unresolvable.
#[derive(Debug, Serialize, ToSchema)]
pub struct BrandDto {
    #[serde(flatten)]
    pub medicine: Option<MedicineDto>,
    pub company_name: Option<String>,
    pub generic_details: Vec<GenericDetailsDto>,
}

impl From<DenormalizedBrand> for BrandDto {
    fn from(row: DenormalizedBrand) -> Self {
        Self {
            medicine: row.medicine.map(MedicineDto::from),
            company_name: row.company_name,
            generic_details: row.generic_details.into_iter().map(GenericDetailsDto::from).collect(),
        }
    }
}

/// Reduced generic projection served by the generics directory.
#[derive(Debug, Serialize, ToSchema)]
pub struct GenericSummaryDto {
    pub generic_id: i32,
    pub generic_name: String,
    /// `null` when the source value is empty or placeholder junk
    pub generic_name_bangla: Option<String>,
}

impl From<GenericSummary> for GenericSummaryDto {
    fn from(s: GenericSummary) -> Self {
        Self {
            generic_id: s.generic_id,
            generic_name: s.generic_name,
            generic_name_bangla: s.generic_name_bangla,
        }
    }
}

/// Company entry served by the companies directory.
#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyDto {
    pub company_id: i32,
    pub company_name: String,
}

impl From<CompanyRecord> for CompanyDto {
    fn from(r: CompanyRecord) -> Self {
        Self {
            company_id: r.company_id,
            company_name: r.company_name,
        }
    }
}

// =============================================================================
// Envelopes
// =============================================================================

/// Paginated brand results.
#[derive(Debug, Serialize, ToSchema)]
pub struct BrandListResponse {
    /// Always `true` for successful responses
    pub status: bool,
    pub details: Vec<BrandDto>,
    pub total_count: u64,
    pub total_pages: u64,
    pub current_page: u32,
}

impl From<PagedResult<DenormalizedBrand>> for BrandListResponse {
    fn from(page: PagedResult<DenormalizedBrand>) -> Self {
        Self {
            status: true,
            details: page.rows.into_iter().map(BrandDto::from).collect(),
            total_count: page.total_count,
            total_pages: page.total_pages,
            current_page: page.current_page,
        }
    }
}

/// Single-brand response; carries no pagination metadata.
#[derive(Debug, Serialize, ToSchema)]
pub struct BrandDetailResponse {
    /// Always `true` for successful responses
    pub status: bool,
    pub details: BrandDto,
}

impl From<DenormalizedBrand> for BrandDetailResponse {
    fn from(row: DenormalizedBrand) -> Self {
        Self {
            status: true,
            details: BrandDto::from(row),
        }
    }
}

/// Paginated generics directory.
#[derive(Debug, Serialize, ToSchema)]
pub struct GenericListResponse {
    /// Always `true` for successful responses
    pub status: bool,
    pub details: Vec<GenericSummaryDto>,
    pub total_count: u64,
    pub total_pages: u64,
    pub current_page: u32,
}

impl From<PagedResult<GenericSummary>> for GenericListResponse {
    fn from(page: PagedResult<GenericSummary>) -> Self {
        Self {
            status: true,
            details: page.rows.into_iter().map(GenericSummaryDto::from).collect(),
            total_count: page.total_count,
            total_pages: page.total_pages,
            current_page: page.current_page,
        }
    }
}

/// Paginated companies directory.
#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyListResponse {
    /// Always `true` for successful responses
    pub status: bool,
    pub details: Vec<CompanyDto>,
    pub total_count: u64,
    pub total_pages: u64,
    pub current_page: u32,
}

impl From<PagedResult<CompanyRecord>> for CompanyListResponse {
    fn from(page: PagedResult<CompanyRecord>) -> Self {
        Self {
            status: true,
            details: page.rows.into_iter().map(CompanyDto::from).collect(),
            total_count: page.total_count,
            total_pages: page.total_pages,
            current_page: page.current_page,
        }
    }
}
