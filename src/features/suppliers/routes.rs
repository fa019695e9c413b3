use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::suppliers::handlers;
use crate::features::suppliers::services::SupplierService;

/// Create routes for the suppliers feature
pub fn routes(service: Arc<SupplierService>) -> Router {
    Router::new()
        .route(
            "/api/supplier",
            get(handlers::list_suppliers).post(handlers::create_supplier),
        )
        .route("/api/supplier/index", get(handlers::supplier_index))
        .route("/api/supplier/search", get(handlers::search_suppliers))
        .route("/api/supplier/export", get(handlers::export_suppliers))
        .route("/api/supplier/delete", post(handlers::delete_suppliers))
        .route(
            "/api/supplier/{id}",
            get(handlers::get_supplier).put(handlers::update_supplier),
        )
        .with_state(service)
}
