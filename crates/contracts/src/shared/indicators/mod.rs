use serde::{Deserialize, Serialize};

use super::columns::Dimension;

// ---------------------------------------------------------------------------
// Period vocabulary
// ---------------------------------------------------------------------------

/// To-date window of the reference year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PeriodRange {
    #[serde(rename = "YTD")]
    Ytd,
    #[serde(rename = "QTD")]
    Qtd,
    #[serde(rename = "MTD")]
    Mtd,
}

impl PeriodRange {
    pub const ALL: [PeriodRange; 3] = [PeriodRange::Ytd, PeriodRange::Qtd, PeriodRange::Mtd];
}

// ---------------------------------------------------------------------------
// Scalar period metric
// ---------------------------------------------------------------------------

/// One line of a current-vs-prior-year comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PeriodMetricRow {
    pub range: PeriodRange,
    pub current_period: f64,
    pub last_period: f64,
    /// `CurrentPeriod / LastPeriod - 1`; `None` when there is nothing to compare against.
    pub growth: Option<f64>,
}

/// YTD / QTD / MTD comparison for a single measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodMetricTable {
    pub measure: String,
    pub rows: Vec<PeriodMetricRow>,
}

impl PeriodMetricTable {
    pub fn row(&self, range: PeriodRange) -> Option<&PeriodMetricRow> {
        self.rows.iter().find(|r| r.range == range)
    }
}

// ---------------------------------------------------------------------------
// Grouped period metric
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedMetricRow {
    pub group: String,
    pub current: f64,
    pub growth: Option<f64>,
}

/// Comparison broken out by a grouping dimension for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GroupedMetric {
    Rows {
        dimension: Dimension,
        range: PeriodRange,
        rows: Vec<GroupedMetricRow>,
    },
    /// The current-period slice is empty.
    NoData,
}

impl GroupedMetric {
    pub fn is_no_data(&self) -> bool {
        matches!(self, GroupedMetric::NoData)
    }

    pub fn rows(&self) -> &[GroupedMetricRow] {
        match self {
            GroupedMetric::Rows { rows, .. } => rows,
            GroupedMetric::NoData => &[],
        }
    }
}

/// YTD, QTD and MTD grouped metrics joined on the group key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodBreakdownRow {
    pub group: String,
    #[serde(rename = "YTD")]
    pub ytd: f64,
    #[serde(rename = "YTD Growth")]
    pub ytd_growth: Option<f64>,
    #[serde(rename = "QTD")]
    pub qtd: Option<f64>,
    #[serde(rename = "QTD Growth")]
    pub qtd_growth: Option<f64>,
    #[serde(rename = "MTD")]
    pub mtd: Option<f64>,
    #[serde(rename = "MTD Growth")]
    pub mtd_growth: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PeriodBreakdown {
    Rows {
        dimension: Dimension,
        rows: Vec<PeriodBreakdownRow>,
    },
    NoData,
}

// ---------------------------------------------------------------------------
// Turnover
// ---------------------------------------------------------------------------

/// Qualitative inventory health derived from turnover in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnoverStatus {
    Frozen,
    Healthy,
    Slow,
    Critical,
    /// Turnover could not be computed (no sales in the window).
    Unknown,
}

/// Which turnover figure drives the status classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnoverBasis {
    /// Stock value against average sales.
    #[serde(rename = "DollarTurnover")]
    Dollar,
    /// Stock units against average quantity sold.
    #[serde(rename = "Turnover")]
    Unit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnoverRow {
    pub group: String,
    /// Monthly sales in month order.
    pub sales: Vec<f64>,
    pub avg_sales: Option<f64>,
    /// Monthly quantity in month order.
    pub quantity: Vec<f64>,
    pub avg_quantity: Option<f64>,
    pub stock_value: f64,
    pub stock: f64,
    pub dollar_turnover: Option<f64>,
    pub unit_turnover: Option<f64>,
    pub status: TurnoverStatus,
}

/// Column labels carrying the window length, e.g. "Sales(3M)".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnoverLabels {
    pub sales: String,
    pub avg_sales: String,
    pub quantity: String,
    pub avg_quantity: String,
}

impl TurnoverLabels {
    pub fn for_months(months: u32) -> Self {
        Self {
            sales: format!("Sales({months}M)"),
            avg_sales: format!("AvgSales({months}M)"),
            quantity: format!("Quantity({months}M)"),
            avg_quantity: format!("AvgQuantity({months}M)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnoverTable {
    pub dimension: Dimension,
    pub basis: TurnoverBasis,
    pub months: u32,
    pub labels: TurnoverLabels,
    pub rows: Vec<TurnoverRow>,
}
