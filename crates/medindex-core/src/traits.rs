//! Trait definition for the catalog store.
//!
//! The persistence engine is an external collaborator: the query pipeline
//! only needs counting, ranked page fetches, point lookups, and two full
//! directory scans. Abstracting them behind [`CatalogStore`] keeps the
//! pipeline testable against an in-memory store and decoupled from the SQL
//! implementation.

use std::future::Future;

use crate::error::CatalogError;
use crate::models::{CompanyRecord, GenericRecord, MedicineRecord};
use crate::paging::PageWindow;

/// Row filter for brand queries. An absent filter value means "match
/// everything".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandFilter {
    /// No filter: every brand matches.
    All,
    /// Case-insensitive substring match on the brand name.
    NameContains(String),
    /// Exact match on the generic foreign key.
    Generic(i32),
    /// Exact match on the company foreign key.
    Company(i32),
}

/// Read-only store for the three catalog collections.
///
/// Ranked page methods must order rows exactly as the canonical ranking
/// defines it (see [`crate::ranking`]): score descending, primary identifier
/// ascending. Implementations are free to evaluate filter, score, sort, and
/// window server-side.
pub trait CatalogStore: Send + Sync + Clone {
    /// Counts brands matching the filter.
    fn count_brands(
        &self,
        filter: &BrandFilter,
    ) -> impl Future<Output = Result<u64, CatalogError>> + Send;

    /// Fetches one ranked page of brands matching the filter.
    fn ranked_brands(
        &self,
        filter: &BrandFilter,
        window: PageWindow,
    ) -> impl Future<Output = Result<Vec<MedicineRecord>, CatalogError>> + Send;

    /// Point lookup of a brand by its unique identifier.
    fn brand_by_id(
        &self,
        brand_id: i32,
    ) -> impl Future<Output = Result<Option<MedicineRecord>, CatalogError>> + Send;

    /// The representative brand for a generic: the one with the lowest
    /// brand id, or `None` when the generic has no marketed brand.
    fn first_brand_for_generic(
        &self,
        generic_id: i32,
    ) -> impl Future<Output = Result<Option<MedicineRecord>, CatalogError>> + Send;

    /// Point lookup of a company by its unique identifier.
    fn company_by_id(
        &self,
        company_id: i32,
    ) -> impl Future<Output = Result<Option<CompanyRecord>, CatalogError>> + Send;

    /// Point lookup of a generic by its unique identifier.
    fn generic_by_id(
        &self,
        generic_id: i32,
    ) -> impl Future<Output = Result<Option<GenericRecord>, CatalogError>> + Send;

    /// Counts generics whose indication list matches the symptom
    /// case-insensitively, or all generics when `symptom` is `None`.
    fn count_generics_by_indication(
        &self,
        symptom: Option<&str>,
    ) -> impl Future<Output = Result<u64, CatalogError>> + Send;

    /// Fetches one ranked page of generics matching the symptom.
    fn ranked_generics_by_indication(
        &self,
        symptom: Option<&str>,
        window: PageWindow,
    ) -> impl Future<Output = Result<Vec<GenericRecord>, CatalogError>> + Send;

    /// Full scan of the generics collection in insertion order.
    ///
    /// Serves the materialize-then-paginate directory path; see the
    /// scalability note on [`crate::catalog::CatalogService::generic_directory`].
    fn all_generics(&self) -> impl Future<Output = Result<Vec<GenericRecord>, CatalogError>> + Send;

    /// Full scan of the companies collection in insertion order.
    fn all_companies(
        &self,
    ) -> impl Future<Output = Result<Vec<CompanyRecord>, CatalogError>> + Send;
}
