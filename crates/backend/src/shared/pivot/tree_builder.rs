use contracts::shared::pivot::{CellValue, ColumnHeader, ColumnType, PivotRow};
use std::collections::{BTreeMap, HashMap};

/// Flat pre-aggregated row
#[derive(Debug, Clone)]
pub struct RawRow {
    /// Column values by column ID
    pub values: HashMap<String, CellValue>,
}

/// Tree builder for transforming flat results to hierarchical pivot structure
pub struct TreeBuilder {
    /// Grouping column IDs (in order)
    grouping_columns: Vec<String>,
    /// Aggregated column IDs
    aggregated_columns: Vec<String>,
}

impl TreeBuilder {
    /// Create a new tree builder
    pub fn new(grouping_columns: Vec<String>, aggregated_columns: Vec<String>) -> Self {
        Self {
            grouping_columns,
            aggregated_columns,
        }
    }

    /// Build a hierarchical pivot tree from flat rows
    pub fn build(&self, rows: &[RawRow]) -> Vec<PivotRow> {
        self.build_recursive(rows.iter().collect(), 0)
    }

    /// Recursively build tree at current level
    fn build_recursive(&self, rows: Vec<&RawRow>, level: usize) -> Vec<PivotRow> {
        let Some(grouping_col) = self.grouping_columns.get(level) else {
            return vec![];
        };
        let is_leaf_level = level + 1 == self.grouping_columns.len();

        // Group rows by current grouping column, keys come out sorted
        let mut groups: BTreeMap<String, Vec<&RawRow>> = BTreeMap::new();
        for row in rows {
            let key = cell_string(&row.values, grouping_col);
            groups.entry(key).or_default().push(row);
        }

        groups
            .into_iter()
            .map(|(group_key, group_rows)| {
                let mut values = HashMap::new();
                values.insert(grouping_col.clone(), CellValue::Text(group_key));

                for agg_col in &self.aggregated_columns {
                    values.insert(agg_col.clone(), subtotal(&group_rows, agg_col));
                }

                let children = if is_leaf_level {
                    vec![]
                } else {
                    self.build_recursive(group_rows, level + 1)
                };

                PivotRow {
                    level,
                    values,
                    is_total: !is_leaf_level,
                    children,
                }
            })
            .collect()
    }
}

/// Sum of the numeric cells of a column; `Null` when there are none
fn subtotal(rows: &[&RawRow], column: &str) -> CellValue {
    let numbers: Vec<f64> = rows
        .iter()
        .filter_map(|row| row.values.get(column).and_then(CellValue::as_number))
        .collect();

    if numbers.is_empty() {
        CellValue::Null
    } else {
        CellValue::Number(numbers.iter().sum())
    }
}

/// String representation of a cell value for grouping
fn cell_string(values: &HashMap<String, CellValue>, column: &str) -> String {
    match values.get(column) {
        Some(CellValue::Text(s)) => s.clone(),
        Some(CellValue::Number(n)) => n.to_string(),
        Some(CellValue::Null) | None => String::new(),
    }
}

/// Helper to create column headers
pub fn create_column_headers(
    grouping_columns: &[String],
    aggregated_columns: &[(String, String)], // (id, name) pairs
) -> Vec<ColumnHeader> {
    let mut headers = Vec::new();

    for col_id in grouping_columns {
        headers.push(ColumnHeader {
            id: col_id.clone(),
            name: col_id.clone(),
            column_type: ColumnType::Grouping,
        });
    }

    for (col_id, col_name) in aggregated_columns {
        headers.push(ColumnHeader {
            id: col_id.clone(),
            name: col_name.clone(),
            column_type: ColumnType::Aggregated,
        });
    }

    headers
}
