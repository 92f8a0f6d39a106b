use std::sync::Arc;

use medindex_core::CatalogService;
use medindex_db::CatalogRepository;

use crate::policy::{AccessPolicy, RateGate};

/// Shared application state for all handlers.
///
/// This is wrapped in Arc internally by Axum when using `with_state()`,
/// so all fields must implement Clone.
#[derive(Clone)]
pub struct AppState {
    /// Catalog query pipeline over the PostgreSQL repository
    pub catalog: CatalogService<CatalogRepository>,

    /// Access rules for the public API (origin exemptions, API key)
    pub policy: Arc<AccessPolicy>,

    /// Keyed rate limiter for keyless clients
    pub rate_gate: Arc<RateGate>,
}

impl AppState {
    /// Creates a new application state with all collaborators initialized.
    pub fn new(pool: sqlx::PgPool, policy: AccessPolicy, rate_gate: RateGate) -> Self {
        Self {
            catalog: CatalogService::new(CatalogRepository::new(pool)),
            policy: Arc::new(policy),
            rate_gate: Arc::new(rate_gate),
        }
    }
}
