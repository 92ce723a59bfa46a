use chrono::Datelike;
use contracts::dashboards::d401_sales::{
    HeatmapRequest, SalesRequest, SalesResponse, YearlyComparisonResponse,
};
use contracts::shared::columns::{Dimension, DisplayCategory, Measure};
use contracts::shared::pivot::MonthlyMatrix;

use crate::shared::config::ReferenceConfig;
use crate::shared::data::dataset::SalesTable;
use crate::shared::error::{DashboardError, Result};
use crate::shared::indicators::heatmap::monthly_heatmap;
use crate::shared::indicators::overview::yearly_comparison;
use crate::shared::indicators::period_metric::{period_breakdown, scalar_period_metric};
use crate::shared::indicators::periods::PeriodFilters;

/// Rows of `table` whose display dimension equals `value`.
fn select(table: &SalesTable, category: DisplayCategory, value: &str) -> Result<SalesTable> {
    let selected = table.filter_eq(category.dimension(), value);
    if selected.is_empty() {
        return Err(DashboardError::no_data(format!(
            "no orders for {} '{}'",
            category.label(),
            value
        )));
    }
    Ok(selected)
}

/// Detail breakdown: products of a brand, brands of anything else
fn detail_dimension(category: DisplayCategory) -> Dimension {
    match category {
        DisplayCategory::Brand => Dimension::Product,
        DisplayCategory::Category | DisplayCategory::Team => Dimension::Brand,
    }
}

/// Get period decomposition of Sales, Profit and Cost for one selected value
pub fn get_sales(
    table: &SalesTable,
    reference: &ReferenceConfig,
    request: SalesRequest,
) -> Result<SalesResponse> {
    let as_of = request.date.unwrap_or(reference.date);
    if as_of < reference.date_min || as_of > reference.date_max {
        return Err(DashboardError::date_range(format!(
            "date {as_of} must lie within {}..{}",
            reference.date_min, reference.date_max
        )));
    }

    let filters = PeriodFilters::from_date(as_of)?;
    let selected = select(table, request.display_by, &request.value)?;
    let detail = detail_dimension(request.display_by);

    Ok(SalesResponse {
        as_of,
        display_by: request.display_by,
        value: request.value,
        sales: scalar_period_metric(&selected, Measure::Sales, &filters),
        profit: scalar_period_metric(&selected, Measure::Profit, &filters),
        cost: scalar_period_metric(&selected, Measure::Cost, &filters),
        by_subcategory: period_breakdown(&selected, Measure::Sales, Dimension::Subcategory, &filters),
        detail_dimension: detail,
        by_detail: period_breakdown(&selected, Measure::Sales, detail, &filters),
    })
}

/// Get monthly sales heatmap for a year
pub fn get_heatmap(
    table: &SalesTable,
    reference: &ReferenceConfig,
    request: HeatmapRequest,
) -> Result<MonthlyMatrix> {
    let first = reference.date_min.year();
    let last = reference.date_max.year();
    if request.year < first || request.year > last {
        return Err(DashboardError::date_range(format!(
            "year {} must lie within {first}..{last}",
            request.year
        )));
    }

    let dimension = request.breakdown_by.dimension();
    if let Some(value) = &request.further {
        select(table, request.breakdown_by, value)?;
    }

    Ok(monthly_heatmap(
        table,
        request.year,
        dimension,
        request.further.as_deref(),
    ))
}

/// Get "Total Sales Trend": reference year against the year before
pub fn get_yearly_comparison(
    table: &SalesTable,
    reference: &ReferenceConfig,
) -> YearlyComparisonResponse {
    yearly_comparison(table, reference.date)
}
