use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::columns::{Dimension, Measure};
use crate::shared::pivot::PivotTree;

/// Request for the overview dashboard
///
/// Missing dates default to the configured `date_min` / `date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewRequest {
    #[serde(default = "default_metric")]
    pub metric: Measure,
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
}

fn default_metric() -> Measure {
    Measure::Sales
}

/// One point of a monthly trend line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Last day of the month the value belongs to
    pub order_date: NaiveDate,
    pub group: String,
    pub value: f64,
}

/// Monthly totals of one measure per group value, over the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub dimension: Dimension,
    pub measure: Measure,
    pub points: Vec<TrendPoint>,
}

/// Response for the overview dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub metric: Measure,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    /// Category, Team and Brand proportions within the date range
    pub proportions: Vec<PivotTree>,
    /// Category, Team and Brand trends
    pub trends: Vec<TrendSeries>,
}
