use axum::{
    extract::{Query, State},
    Json,
};
use contracts::dashboards::d400_overview::{OverviewRequest, OverviewResponse};

use crate::dashboards::d400_overview::service;
use crate::shared::error::DashboardError;
use crate::state::AppState;

/// GET /api/d400/overview?metric=Sales&date_from=2023-01-01&date_to=2024-09-30
pub async fn get_overview(
    State(state): State<AppState>,
    Query(request): Query<OverviewRequest>,
) -> Result<Json<OverviewResponse>, DashboardError> {
    tracing::info!(
        "D400 Dashboard: Getting overview of {} for {:?}..{:?}",
        request.metric,
        request.date_from,
        request.date_to
    );

    let table = state.table()?;
    match service::get_overview(&table, state.reference(), request) {
        Ok(response) => {
            tracing::info!(
                "D400 Dashboard: Returning {} proportion trees and {} trends",
                response.proportions.len(),
                response.trends.len()
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D400 Dashboard: Failed to get overview: {}", e);
            Err(e)
        }
    }
}
