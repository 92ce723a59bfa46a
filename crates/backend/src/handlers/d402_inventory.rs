use axum::{
    extract::{Query, State},
    Json,
};
use contracts::dashboards::d402_inventory::{TurnoverRequest, TurnoverResponse};

use crate::dashboards::d402_inventory::service;
use crate::shared::error::DashboardError;
use crate::state::AppState;

/// GET /api/d402/turnover?months=3&category=Shoes&brand=Acme
pub async fn get_turnover(
    State(state): State<AppState>,
    Query(request): Query<TurnoverRequest>,
) -> Result<Json<TurnoverResponse>, DashboardError> {
    tracing::info!(
        "D402 Dashboard: Getting {}-month turnover for '{}'",
        request.months,
        request.category
    );

    let table = state.table()?;
    match service::get_turnover(&table, state.reference(), request) {
        Ok(response) => {
            tracing::info!(
                "D402 Dashboard: Returning {} brands, products for {:?}",
                response.by_brand.rows.len(),
                response.brand
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D402 Dashboard: Failed to get turnover: {}", e);
            Err(e)
        }
    }
}
