use axum::{
    extract::{Path, State},
    Json,
};
use contracts::shared::columns::{Dimension, DisplayCategory};
use contracts::shared::meta::{
    DimensionValuesResponse, DisplayCategoryInfo, MetaResponse, ReloadResponse,
};

use crate::shared::error::DashboardError;
use crate::state::AppState;

/// GET /api/meta
pub async fn get_meta(State(state): State<AppState>) -> Json<MetaResponse> {
    let reference = state.reference();
    let display_categories = DisplayCategory::ALL
        .into_iter()
        .map(|category| DisplayCategoryInfo {
            category,
            label: category.label().to_string(),
            dimension: category.dimension(),
        })
        .collect();

    Json(MetaResponse {
        date: reference.date,
        date_min: reference.date_min,
        date_max: reference.date_max,
        display_categories,
    })
}

/// GET /api/dimensions/:dimension/values
pub async fn get_dimension_values(
    State(state): State<AppState>,
    Path(dimension): Path<String>,
) -> Result<Json<DimensionValuesResponse>, DashboardError> {
    let dimension: Dimension = dimension.parse()?;
    let table = state.table()?;
    let values = table.distinct_values(dimension);
    tracing::info!("Returning {} values of {}", values.len(), dimension);

    Ok(Json(DimensionValuesResponse { dimension, values }))
}

/// POST /api/dataset/reload
pub async fn reload_dataset(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, DashboardError> {
    match state.cache.reload(&state.data_path) {
        Ok(table) => {
            let span = table.date_span();
            Ok(Json(ReloadResponse {
                rows: table.len(),
                date_from: span.map(|(from, _)| from),
                date_to: span.map(|(_, to)| to),
            }))
        }
        Err(e) => {
            tracing::error!("Failed to reload dataset: {}", e);
            Err(e)
        }
    }
}
