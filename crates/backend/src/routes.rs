use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // LOOKUPS
        // ========================================
        .route("/api/meta", get(handlers::meta::get_meta))
        .route(
            "/api/dimensions/:dimension/values",
            get(handlers::meta::get_dimension_values),
        )
        .route("/api/dataset/reload", post(handlers::meta::reload_dataset))
        // ========================================
        // DASHBOARDS
        // ========================================
        // D400 Overview
        .route(
            "/api/d400/overview",
            get(handlers::d400_overview::get_overview),
        )
        // D401 Sales
        .route("/api/d401/sales", get(handlers::d401_sales::get_sales))
        .route("/api/d401/heatmap", get(handlers::d401_sales::get_heatmap))
        .route(
            "/api/d401/yearly",
            get(handlers::d401_sales::get_yearly_comparison),
        )
        // D402 Inventory
        .route(
            "/api/d402/turnover",
            get(handlers::d402_inventory::get_turnover),
        )
        .with_state(state)
}
