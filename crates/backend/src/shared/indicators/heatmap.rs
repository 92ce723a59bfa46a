use chrono::Datelike;
use contracts::shared::columns::{Dimension, Measure};
use contracts::shared::pivot::{MatrixRow, MonthlyMatrix, MONTH_ABBR};
use std::collections::BTreeMap;

use crate::shared::data::dataset::SalesTable;

/// Monthly sales of `year` pivoted into a group-by-month matrix.
///
/// Without `subgroup` the rows are the values of `group`. With `subgroup`
/// only rows where `group == subgroup` are kept and the rows switch to the
/// complementary dimension (brand -> subcategory, anything else -> brand).
/// Months without orders stay `None`.
pub fn monthly_heatmap(
    table: &SalesTable,
    year: i32,
    group: Dimension,
    subgroup: Option<&str>,
) -> MonthlyMatrix {
    let row_dimension = match subgroup {
        None => group,
        Some(_) => group.complementary(),
    };

    let mut cells: BTreeMap<&str, [Option<f64>; 12]> = BTreeMap::new();

    for t in table.rows() {
        if t.order_date.year() != year {
            continue;
        }
        if let Some(value) = subgroup {
            if t.dimension(group) != value {
                continue;
            }
        }

        let month = t.order_date.month0() as usize;
        let row = cells.entry(t.dimension(row_dimension)).or_insert([None; 12]);
        *row[month].get_or_insert(0.0) += t.measure(Measure::Sales);
    }

    MonthlyMatrix {
        year,
        row_dimension,
        columns: MONTH_ABBR.iter().map(|m| m.to_string()).collect(),
        rows: cells
            .into_iter()
            .map(|(key, values)| MatrixRow {
                key: key.to_string(),
                values: values.to_vec(),
            })
            .collect(),
    }
}
