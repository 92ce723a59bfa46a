use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::columns::{Dimension, DisplayCategory, Measure};
use crate::shared::indicators::{PeriodBreakdown, PeriodMetricTable};

/// Request for the sales decomposition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRequest {
    /// "As of" date; defaults to the configured reference date
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub display_by: DisplayCategory,
    /// Selected value of the display category (e.g. a brand name)
    pub value: String,
}

/// Response for the sales decomposition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesResponse {
    pub as_of: NaiveDate,
    pub display_by: DisplayCategory,
    pub value: String,
    pub sales: PeriodMetricTable,
    pub profit: PeriodMetricTable,
    pub cost: PeriodMetricTable,
    pub by_subcategory: PeriodBreakdown,
    /// Breakdown by product when displaying by brand, by brand otherwise
    pub detail_dimension: Dimension,
    pub by_detail: PeriodBreakdown,
}

/// Request for the monthly sales heatmap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapRequest {
    pub year: i32,
    pub breakdown_by: DisplayCategory,
    /// Further breakdown: a value of `breakdown_by` to drill into
    #[serde(default)]
    pub further: Option<String>,
}

/// Monthly series of one item for the current and the previous year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyComparisonRow {
    pub item: Measure,
    /// January up to the reference month
    pub current_year: Vec<Option<f64>>,
    /// January to December of the previous year
    pub last_year: Vec<Option<f64>>,
}

/// "Total Sales Trend" table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyComparisonResponse {
    pub current_year: i32,
    pub last_year: i32,
    pub rows: Vec<YearlyComparisonRow>,
}
