//! Relevance scoring for ranked result pages.
//!
//! A brand name scores its whitespace token count, so multi-word names rank
//! above single-word ones; a generic scores the number of indications it
//! lists. Ties break by primary identifier ascending, making the ordering
//! fully deterministic. The scoring here is the oracle every
//! [`CatalogStore`](crate::CatalogStore) implementation must reproduce when
//! serving ranked pages.

use crate::models::{GenericRecord, MedicineRecord};

/// Score of a string-valued field: its whitespace-delimited token count.
pub fn word_score(value: &str) -> i64 {
    value.split_whitespace().count() as i64
}

/// Score of a list-valued field: its element count.
pub fn list_score<T>(items: &[T]) -> i64 {
    items.len() as i64
}

/// Orders brands by descending brand-name word score, then brand id.
pub fn rank_brands(brands: &mut [MedicineRecord]) {
    brands.sort_by(|a, b| {
        word_score(&b.brand_name)
            .cmp(&word_score(&a.brand_name))
            .then(a.brand_id.cmp(&b.brand_id))
    });
}

/// Orders generics by descending indication count, then generic id.
pub fn rank_generics(generics: &mut [GenericRecord]) {
    generics.sort_by(|a, b| {
        list_score(&b.indication)
            .cmp(&list_score(&a.indication))
            .then(a.generic_id.cmp(&b.generic_id))
    });
}
