use thiserror::Error;

/// Catalog-wide error type.
///
/// Uses `thiserror` with automatic conversion from underlying library errors
/// (`sqlx::Error` → [`CatalogError::DatabaseError`]). Missing related records
/// are deliberately *not* errors: the join resolver represents them as
/// null/empty fields in the denormalized result.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Database operation failed.
    ///
    /// Wraps all sqlx errors: connection failures, query errors, pool
    /// exhaustion. Surfaced to the request boundary as a single failed
    /// response, never retried internally.
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// A caller-supplied value could not be interpreted.
    ///
    /// Raised for non-numeric typed identifiers. Page and limit parameters
    /// are coerced to defaults instead and never produce this error.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
