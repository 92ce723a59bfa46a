use axum::{
    extract::{Query, State},
    Json,
};
use contracts::dashboards::d401_sales::{
    HeatmapRequest, SalesRequest, SalesResponse, YearlyComparisonResponse,
};
use contracts::shared::indicators::PeriodRange;
use contracts::shared::pivot::MonthlyMatrix;

use crate::dashboards::d401_sales::service;
use crate::shared::format::format_amount;
use crate::shared::error::DashboardError;
use crate::state::AppState;

/// GET /api/d401/sales?date=2024-09-30&display_by=Brand&value=Acme
pub async fn get_sales(
    State(state): State<AppState>,
    Query(request): Query<SalesRequest>,
) -> Result<Json<SalesResponse>, DashboardError> {
    tracing::info!(
        "D401 Dashboard: Getting sales for {} '{}' as of {:?}",
        request.display_by.label(),
        request.value,
        request.date
    );

    let table = state.table()?;
    match service::get_sales(&table, state.reference(), request) {
        Ok(response) => {
            let ytd = response
                .sales
                .row(PeriodRange::Ytd)
                .map(|r| r.current_period)
                .unwrap_or_default();
            tracing::info!(
                "D401 Dashboard: Returning sales as of {} for '{}', YTD {}",
                response.as_of,
                response.value,
                format_amount(ytd)
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D401 Dashboard: Failed to get sales: {}", e);
            Err(e)
        }
    }
}

/// GET /api/d401/heatmap?year=2024&breakdown_by=Category&further=Shoes
pub async fn get_heatmap(
    State(state): State<AppState>,
    Query(request): Query<HeatmapRequest>,
) -> Result<Json<MonthlyMatrix>, DashboardError> {
    tracing::info!(
        "D401 Dashboard: Getting heatmap for {} by {}",
        request.year,
        request.breakdown_by.label()
    );

    let table = state.table()?;
    match service::get_heatmap(&table, state.reference(), request) {
        Ok(matrix) => {
            tracing::info!("D401 Dashboard: Returning {} heatmap rows", matrix.rows.len());
            Ok(Json(matrix))
        }
        Err(e) => {
            tracing::error!("D401 Dashboard: Failed to get heatmap: {}", e);
            Err(e)
        }
    }
}

/// GET /api/d401/yearly
pub async fn get_yearly_comparison(
    State(state): State<AppState>,
) -> Result<Json<YearlyComparisonResponse>, DashboardError> {
    let table = state.table()?;
    let response = service::get_yearly_comparison(&table, state.reference());
    tracing::info!(
        "D401 Dashboard: Returning {} against {}",
        response.current_year,
        response.last_year
    );
    Ok(Json(response))
}
