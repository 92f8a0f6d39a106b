//! The query pipeline: one service, seven catalog operations.
//!
//! Every list operation runs the same algorithm: build filter, count
//! matches, fetch a ranked page from the store, join-resolve each row
//! concurrently, normalize, return rows with pagination metadata. The two
//! directory operations ([`CatalogService::generic_directory`] and
//! [`CatalogService::company_directory`]) are a distinct mode: they
//! materialize the entire collection and paginate in memory, with no
//! ranking. Clients observe that ordering, so the directory mode must not
//! be folded into the ranked path even though it does not scale.

use futures::stream::{self, StreamExt};

use crate::denorm::{resolve_brand, resolve_generic_match};
use crate::error::CatalogError;
use crate::models::{CompanyRecord, DenormalizedBrand, GenericSummary};
use crate::paging::PageParams;
use crate::textnorm::presentable_bangla;
use crate::traits::{BrandFilter, CatalogStore};

/// One page of results plus the envelope metadata every list endpoint
/// reports.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedResult<T> {
    pub rows: Vec<T>,
    pub total_count: u64,
    pub total_pages: u64,
    pub current_page: u32,
}

/// Read-only lookup service over the medicine catalog.
///
/// Generic over the store so the pipeline can be exercised against an
/// in-memory catalog in tests and the SQL repository in production.
#[derive(Clone)]
pub struct CatalogService<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Brands whose name contains `name` case-insensitively; all brands when
    /// the query is absent or blank.
    pub async fn brand_search(
        &self,
        name: Option<&str>,
        params: PageParams,
    ) -> Result<PagedResult<DenormalizedBrand>, CatalogError> {
        let filter = match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => BrandFilter::NameContains(name.to_string()),
            None => BrandFilter::All,
        };
        self.ranked_brand_page(filter, params).await
    }

    /// Brands referencing the given generic.
    pub async fn brands_by_generic(
        &self,
        generic_id: i32,
        params: PageParams,
    ) -> Result<PagedResult<DenormalizedBrand>, CatalogError> {
        self.ranked_brand_page(BrandFilter::Generic(generic_id), params)
            .await
    }

    /// Brands manufactured by the given company.
    pub async fn brands_by_company(
        &self,
        company_id: i32,
        params: PageParams,
    ) -> Result<PagedResult<DenormalizedBrand>, CatalogError> {
        self.ranked_brand_page(BrandFilter::Company(company_id), params)
            .await
    }

    /// Generics whose indication list matches `symptom` case-insensitively,
    /// served in the brand-shaped response via the generic→medicine join.
    pub async fn symptom_search(
        &self,
        symptom: Option<&str>,
        params: PageParams,
    ) -> Result<PagedResult<DenormalizedBrand>, CatalogError> {
        let symptom = symptom.map(str::trim).filter(|s| !s.is_empty());
        let total_count = self.store.count_generics_by_indication(symptom).await?;
        let matched = self
            .store
            .ranked_generics_by_indication(symptom, params.window())
            .await?;

        let rows = stream::iter(matched)
            .map(|generic| resolve_generic_match(&self.store, generic))
            .buffered(params.limit as usize)
            .collect::<Vec<_>>()
            .await;

        Ok(PagedResult {
            rows,
            total_count,
            total_pages: params.total_pages(total_count),
            current_page: params.page,
        })
    }

    /// Single brand by its unique identifier, join-resolved. `None` maps to
    /// not-found at the HTTP boundary.
    pub async fn brand_details(
        &self,
        brand_id: i32,
    ) -> Result<Option<DenormalizedBrand>, CatalogError> {
        match self.store.brand_by_id(brand_id).await? {
            Some(medicine) => Ok(Some(resolve_brand(&self.store, medicine).await)),
            None => Ok(None),
        }
    }

    /// The generics directory: full collection, in-memory pagination, no
    /// ranking, reduced projection.
    pub async fn generic_directory(
        &self,
        params: PageParams,
    ) -> Result<PagedResult<GenericSummary>, CatalogError> {
        let all = self.store.all_generics().await?;
        let total_count = all.len() as u64;

        let rows = all
            .into_iter()
            .skip(params.skip() as usize)
            .take(params.limit as usize)
            .map(|generic| GenericSummary {
                generic_id: generic.generic_id,
                generic_name: generic.generic_name,
                generic_name_bangla: presentable_bangla(&generic.generic_name_bangla),
            })
            .collect();

        Ok(PagedResult {
            rows,
            total_count,
            total_pages: params.total_pages(total_count),
            current_page: params.page,
        })
    }

    /// The companies directory: full collection, in-memory pagination, no
    /// ranking.
    pub async fn company_directory(
        &self,
        params: PageParams,
    ) -> Result<PagedResult<CompanyRecord>, CatalogError> {
        let all = self.store.all_companies().await?;
        let total_count = all.len() as u64;

        let rows = all
            .into_iter()
            .skip(params.skip() as usize)
            .take(params.limit as usize)
            .collect();

        Ok(PagedResult {
            rows,
            total_count,
            total_pages: params.total_pages(total_count),
            current_page: params.page,
        })
    }

    async fn ranked_brand_page(
        &self,
        filter: BrandFilter,
        params: PageParams,
    ) -> Result<PagedResult<DenormalizedBrand>, CatalogError> {
        let total_count = self.store.count_brands(&filter).await?;
        let matched = self.store.ranked_brands(&filter, params.window()).await?;

        // Per-row joins are independent; buffered keeps completion order
        // aligned with rank order while bounding fan-out to the page size.
        let rows = stream::iter(matched)
            .map(|medicine| resolve_brand(&self.store, medicine))
            .buffered(params.limit as usize)
            .collect::<Vec<_>>()
            .await;

        Ok(PagedResult {
            rows,
            total_count,
            total_pages: params.total_pages(total_count),
            current_page: params.page,
        })
    }
}
