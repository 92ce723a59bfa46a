use serde::{Deserialize, Serialize};

use crate::shared::indicators::TurnoverTable;

/// Request for the turnover analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnoverRequest {
    /// Number of past months, counted back from the reference month
    #[serde(default = "default_months")]
    pub months: u32,
    pub category: String,
    /// Brand to break down into products; defaults to the first brand
    #[serde(default)]
    pub brand: Option<String>,
}

fn default_months() -> u32 {
    3
}

/// Response for the turnover analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnoverResponse {
    pub months: u32,
    pub category: String,
    /// Brands of the category within the window, sorted
    pub brands: Vec<String>,
    /// Dollar turnover per brand
    pub by_brand: TurnoverTable,
    /// Brand the product table was built for
    pub brand: Option<String>,
    /// Unit turnover per product of `brand`
    pub by_product: Option<TurnoverTable>,
}
