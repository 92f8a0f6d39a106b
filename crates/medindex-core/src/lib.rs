//! Medindex Core - Domain types and the catalog query pipeline.
//!
//! This crate provides the heart of the medindex lookup service:
//!
//! - **Domain models**: [`MedicineRecord`], [`GenericRecord`],
//!   [`CompanyRecord`], and the per-response [`DenormalizedBrand`]
//! - **Query pipeline**: [`CatalogService`]: filter, count, ranked page,
//!   concurrent per-row join resolution, normalization
//! - **Sub-components**: [`paging`] (defensive pagination contract),
//!   [`ranking`] (word-count relevance with deterministic tie-break),
//!   [`textnorm`] (whitespace cleanup), [`denorm`] (join resolver)
//! - **Trait**: [`CatalogStore`] for dependency injection of the
//!   persistence layer
//!
//! # Architecture
//!
//! The catalog is read-only. Business logic is decoupled from I/O through
//! the [`CatalogStore`] trait: the server frontend wires in the PostgreSQL
//! repository, while tests drive the same pipeline against an in-memory
//! store.
//!
//! # Example
//!
//! ```ignore
//! use medindex_core::{CatalogService, PageParams};
//!
//! let catalog = CatalogService::new(repository);
//! let page = catalog
//!     .brand_search(Some("napa"), PageParams::from_raw(Some("1"), Some("10")))
//!     .await?;
//! println!("{} of {} brands", page.rows.len(), page.total_count);
//! ```

pub mod catalog;
pub mod denorm;
pub mod error;
pub mod models;
pub mod paging;
pub mod ranking;
pub mod textnorm;
pub mod traits;

// Error handling
pub use error::CatalogError;

// Domain models
pub use models::{
    CompanyRecord, DenormalizedBrand, GenericRecord, GenericSummary, MedicineRecord,
};

// Pagination contract
pub use paging::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, PageParams, PageWindow};

// Store abstraction
pub use traits::{BrandFilter, CatalogStore};

// Query pipeline
pub use catalog::{CatalogService, PagedResult};
