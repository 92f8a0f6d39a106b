//! Domain models for the medicine catalog.
//!
//! All three catalog entities are read-only from this system's perspective:
//! they are sourced from a pre-populated reference dataset and never created,
//! mutated, or deleted here. The only derived shape is [`DenormalizedBrand`],
//! assembled fresh on every request and never persisted.

use serde::{Deserialize, Serialize};

/// A pharmaceutical brand entry.
///
/// `generic_id` is a typed optional integer: one upstream schema variant
/// stored it as a string, so the store boundary owns parsing and a record
/// without a resolvable generic simply carries `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MedicineRecord {
    /// Unique brand identifier.
    pub brand_id: i32,
    /// Marketed brand name.
    pub brand_name: String,
    /// Dosage form (tablet, syrup, ...).
    pub form: String,
    /// Foreign key into the generics collection, when known.
    pub generic_id: Option<i32>,
    /// Foreign key into the companies collection.
    pub company_id: i32,
    /// Pack size as printed in the catalog.
    pub pack_size: String,
    /// Retail price as printed in the catalog.
    pub price: String,
    /// Strength as printed in the catalog.
    pub strength: String,
}

/// A drug's generic/chemical identity. One generic may be referenced by many
/// brands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct GenericRecord {
    /// Unique generic identifier.
    pub generic_id: i32,
    /// Generic name.
    pub generic_name: String,
    /// Generic name in Bangla script. May be empty or whitespace-only, in
    /// which case the directory listing suppresses it.
    pub generic_name_bangla: String,
    /// Symptoms and conditions this generic is indicated for.
    pub indication: Vec<String>,
}

/// A manufacturer. One company may be referenced by many brands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CompanyRecord {
    /// Unique company identifier.
    pub company_id: i32,
    /// Company name.
    pub company_name: String,
}

/// A per-response composite joining a brand with its related company and
/// generic records.
///
/// `medicine` is `None` only in the generic→medicine join direction, when a
/// generic matched by a symptom search has no marketed brand; the result then
/// surfaces only the generic fields. Missing joins are valid states, never
/// errors: an unresolvable company yields `company_name = None`, an
/// unresolvable generic an empty `generic_details`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenormalizedBrand {
    pub medicine: Option<MedicineRecord>,
    pub company_name: Option<String>,
    pub generic_details: Vec<GenericRecord>,
}

/// Reduced projection of a generic record served by the generics directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenericSummary {
    pub generic_id: i32,
    pub generic_name: String,
    /// `None` when fewer than two characters remain after trimming
    /// (placeholder values in the source data).
    pub generic_name_bangla: Option<String>,
}
