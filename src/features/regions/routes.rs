use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/api/provinces", get(handlers::list_provinces))
        .route(
            "/api/provinces/{id}/cities",
            get(handlers::list_cities_by_province),
        )
        // Cascading dropdown endpoint used by the supplier screens
        .route("/api/supplier/cities", get(handlers::city_options))
        .with_state(service)
}
