//! Whitespace cleanup applied to generic records before they reach a client.
//!
//! The source catalog carries ragged spacing (double spaces, stray leading
//! whitespace, tab-padded cells), so every string field of a joined generic
//! record is collapsed and trimmed. Brand fields are served verbatim.

use crate::models::GenericRecord;

/// Collapses runs of whitespace to single spaces and trims the ends.
///
/// Idempotent: applying it twice equals applying it once.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cleans every string field of a generic record.
pub fn normalize_generic(mut record: GenericRecord) -> GenericRecord {
    record.generic_name = collapse_whitespace(&record.generic_name);
    record.generic_name_bangla = collapse_whitespace(&record.generic_name_bangla);
    for entry in &mut record.indication {
        *entry = collapse_whitespace(entry);
    }
    record
}

/// Trims a Bangla generic name and suppresses near-empty leftovers.
///
/// Fields shorter than two characters after trimming are placeholder junk in
/// the source data and are emitted as `None`.
pub fn presentable_bangla(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.chars().count() < 2 {
        None
    } else {
        Some(trimmed.to_string())
    }
}
