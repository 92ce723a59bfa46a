use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column header information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnHeader {
    /// Column identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Column type
    pub column_type: ColumnType,
}

/// Type of column in the pivot table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// Grouping column
    Grouping,
    /// Aggregated numeric column
    Aggregated,
}

/// A single row in the pivot tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotRow {
    /// Hierarchy level (0 = outermost grouping)
    pub level: usize,
    /// Values by column ID
    pub values: HashMap<String, CellValue>,
    /// Whether this row is a subtotal row with children
    pub is_total: bool,
    /// Child rows (for hierarchical display)
    pub children: Vec<PivotRow>,
}

/// Value in a pivot table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Null value
    Null,
}

impl CellValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Hierarchical totals of one measure along a path of dimensions
/// (e.g. Category -> Subcategory), used for proportion charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotTree {
    pub title: String,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<PivotRow>,
}
