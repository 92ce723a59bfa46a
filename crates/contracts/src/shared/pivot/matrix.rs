use serde::{Deserialize, Serialize};

use crate::shared::columns::Dimension;

/// Calendar month abbreviations used as matrix columns.
pub const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub key: String,
    /// One cell per column; `None` means no orders, which is not the same as zero.
    pub values: Vec<Option<f64>>,
}

/// Dense month-by-group matrix, ready for an intensity grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyMatrix {
    pub year: i32,
    /// Dimension the rows are keyed by
    pub row_dimension: Dimension,
    pub columns: Vec<String>,
    pub rows: Vec<MatrixRow>,
}

impl MonthlyMatrix {
    pub fn row(&self, key: &str) -> Option<&MatrixRow> {
        self.rows.iter().find(|r| r.key == key)
    }
}
