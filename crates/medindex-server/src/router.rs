//! Router configuration and route composition.

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::{Router, middleware, routing::get};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServerConfig;
use crate::handlers::{companies, generics, health, medicines};
use crate::openapi::ApiDoc;
use crate::policy::enforce_access_policy;
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    // Catalog routes sit behind the access policy; /health does not.
    let medicine_routes = Router::new()
        .route("/", get(medicines::list_medicines))
        .route("/search", get(generics::search_by_symptom))
        .route("/generic", get(generics::list_generics))
        .route("/searchByGeneric", get(medicines::search_by_generic))
        .route("/company", get(companies::list_companies))
        .route("/searchByCompanyId", get(medicines::search_by_company))
        .route("/:brandId", get(medicines::get_medicine_details))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            enforce_access_policy,
        ));

    let cors_layer = build_cors_layer(&config.cors_origins);

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v2/medicine", medicine_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware layers (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .with_state(state)
}

/// Build CORS layer from configuration.
///
/// If `origins` is "*", allows any origin (for development).
/// Otherwise, parses comma-separated origins.
fn build_cors_layer(origins: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600));

    if origins == "*" {
        cors.allow_origin(tower_http::cors::Any)
    } else {
        let allowed: Vec<HeaderValue> = origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(allowed)
    }
}
