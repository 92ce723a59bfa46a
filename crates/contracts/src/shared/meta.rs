use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::columns::{Dimension, DisplayCategory};

/// Entry of the "Display by" selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayCategoryInfo {
    pub category: DisplayCategory,
    pub label: String,
    pub dimension: Dimension,
}

/// Reference dates bounding date pickers and sliders, plus selector options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaResponse {
    /// "Today" anchor of the dashboard
    pub date: NaiveDate,
    pub date_min: NaiveDate,
    pub date_max: NaiveDate,
    pub display_categories: Vec<DisplayCategoryInfo>,
}

/// Distinct values of one dimension, sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionValuesResponse {
    pub dimension: Dimension,
    pub values: Vec<String>,
}

/// Result of re-reading the dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub rows: usize,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}
