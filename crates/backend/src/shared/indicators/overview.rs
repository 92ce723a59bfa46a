use chrono::{Datelike, NaiveDate};
use contracts::dashboards::d400_overview::{TrendPoint, TrendSeries};
use contracts::dashboards::d401_sales::{YearlyComparisonResponse, YearlyComparisonRow};
use contracts::shared::columns::{Dimension, Measure};
use contracts::shared::pivot::{CellValue, PivotTree};
use std::collections::{BTreeMap, HashMap};

use super::periods::DateWindow;
use crate::shared::data::dataset::SalesTable;
use crate::shared::error::{DashboardError, Result};
use crate::shared::pivot::tree_builder::{create_column_headers, RawRow, TreeBuilder};

/// Checks that `[from, to]` is ordered and lies within `[min, max]`.
pub fn bounded_window(
    from: NaiveDate,
    to: NaiveDate,
    min: NaiveDate,
    max: NaiveDate,
) -> Result<DateWindow> {
    if from > to {
        return Err(DashboardError::date_range(format!(
            "start date {from} is after end date {to}"
        )));
    }
    if from < min || to > max {
        return Err(DashboardError::date_range(format!(
            "date range {from}..{to} must lie within {min}..{max}"
        )));
    }
    Ok(DateWindow::new(from, to))
}

/// Totals of `measure` inside `window`, grouped along `path`.
///
/// Every level of the tree carries the subtotal of its children, groups
/// are sorted by key.
pub fn proportion_tree(
    table: &SalesTable,
    window: DateWindow,
    path: &[Dimension],
    measure: Measure,
) -> PivotTree {
    let mut totals: BTreeMap<Vec<&str>, f64> = BTreeMap::new();
    for t in table.rows().iter().filter(|t| window.contains(t.order_date)) {
        let key: Vec<&str> = path.iter().map(|d| t.dimension(*d)).collect();
        *totals.entry(key).or_insert(0.0) += t.measure(measure);
    }

    let measure_id = measure.column_name().to_string();
    let grouping: Vec<String> = path.iter().map(|d| d.column_name().to_string()).collect();

    let raw_rows: Vec<RawRow> = totals
        .into_iter()
        .map(|(key, value)| {
            let mut values: HashMap<String, CellValue> = grouping
                .iter()
                .zip(key)
                .map(|(col, v)| (col.clone(), CellValue::Text(v.to_string())))
                .collect();
            values.insert(measure_id.clone(), CellValue::Number(value));
            RawRow { values }
        })
        .collect();

    let builder = TreeBuilder::new(grouping.clone(), vec![measure_id.clone()]);
    let title = path
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" / ");

    PivotTree {
        title,
        columns: create_column_headers(&grouping, &[(measure_id, measure.to_string())]),
        rows: builder.build(&raw_rows),
    }
}

/// Last calendar day of a month.
pub fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next?.pred_opt()
}

/// Monthly totals of `measure` per value of `dimension`, stamped with the
/// month-end date. Points are sorted by date, then by group.
pub fn monthly_trend(table: &SalesTable, dimension: Dimension, measure: Measure) -> TrendSeries {
    let mut totals: BTreeMap<(i32, u32, &str), f64> = BTreeMap::new();
    for t in table.rows() {
        let key = (t.order_date.year(), t.order_date.month(), t.dimension(dimension));
        *totals.entry(key).or_insert(0.0) += t.measure(measure);
    }

    let points = totals
        .into_iter()
        .filter_map(|((year, month, group), value)| {
            Some(TrendPoint {
                order_date: month_end(year, month)?,
                group: group.to_string(),
                value,
            })
        })
        .collect();

    TrendSeries {
        dimension,
        measure,
        points,
    }
}

#[derive(Default, Clone, Copy)]
struct MonthTotals {
    sales: f64,
    profit: f64,
}

/// Monthly Sales, Profit and Cost of the reference year (January up to the
/// reference month) next to the twelve months of the year before.
///
/// Cost here is what was not profit: `Sales - Profit`. Months without any
/// order stay `None`.
pub fn yearly_comparison(table: &SalesTable, reference: NaiveDate) -> YearlyComparisonResponse {
    let current_year = reference.year();
    let last_year = current_year - 1;

    let mut months: HashMap<(i32, u32), MonthTotals> = HashMap::new();
    for t in table.rows() {
        let year = t.order_date.year();
        if year != current_year && year != last_year {
            continue;
        }
        let m = months.entry((year, t.order_date.month())).or_default();
        m.sales += t.sales;
        m.profit += t.profit;
    }

    let series = |year: i32, last_month: u32, pick: fn(&MonthTotals) -> f64| -> Vec<Option<f64>> {
        (1..=last_month)
            .map(|month| months.get(&(year, month)).map(pick))
            .collect()
    };

    let items: [(Measure, fn(&MonthTotals) -> f64); 3] = [
        (Measure::Sales, |m| m.sales),
        (Measure::Profit, |m| m.profit),
        (Measure::Cost, |m| m.sales - m.profit),
    ];

    let rows = items
        .into_iter()
        .map(|(item, pick)| YearlyComparisonRow {
            item,
            current_year: series(current_year, reference.month(), pick),
            last_year: series(last_year, 12, pick),
        })
        .collect();

    YearlyComparisonResponse {
        current_year,
        last_year,
        rows,
    }
}
