use chrono::{Datelike, NaiveDate};
use contracts::shared::columns::Dimension;
use contracts::shared::indicators::{
    TurnoverBasis, TurnoverLabels, TurnoverRow, TurnoverStatus, TurnoverTable,
};
use std::collections::BTreeMap;

use crate::shared::data::dataset::SalesTable;
use crate::shared::error::{DashboardError, Result};

/// Days in the month convention used for turnover.
const DAYS_PER_MONTH: f64 = 30.0;

/// Status for a turnover in days; half-open bands from 0 up, undefined or
/// negative (negative stock or net price) is `Unknown`.
pub fn classify_turnover(days: Option<f64>) -> TurnoverStatus {
    match days {
        Some(d) if d.is_nan() || d < 0.0 => TurnoverStatus::Unknown,
        Some(d) if d >= 90.0 => TurnoverStatus::Frozen,
        Some(d) if d >= 60.0 => TurnoverStatus::Healthy,
        Some(d) if d >= 30.0 => TurnoverStatus::Slow,
        Some(_) => TurnoverStatus::Critical,
        None => TurnoverStatus::Unknown,
    }
}

/// `round(stock / average * 30)`, undefined for a zero or missing average.
fn turnover_days(stock: f64, average: Option<f64>) -> Option<f64> {
    let days = (stock / average? * DAYS_PER_MONTH).round();
    days.is_finite().then_some(days)
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Rows of the last `months` months of the reference year, ending with the
/// reference month.
///
/// `months` must be between 1 and the reference month.
pub fn trailing_window(table: &SalesTable, reference: NaiveDate, months: u32) -> Result<SalesTable> {
    let month = reference.month();
    if months == 0 || months > month {
        return Err(DashboardError::date_range(format!(
            "turnover window of {months} months must be between 1 and {month}"
        )));
    }

    let year = reference.year();
    let start = NaiveDate::from_ymd_opt(year, month - months + 1, 1);
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let (Some(start), Some(end)) = (start, end) else {
        return Err(DashboardError::date_range(format!(
            "cannot build a {months}-month window ending {year:04}-{month:02}"
        )));
    };

    Ok(table.filter(|t| start <= t.order_date && t.order_date < end))
}

#[derive(Default)]
struct MonthBucket {
    sales: f64,
    quantity: f64,
    stock_value: f64,
    stock: f64,
}

#[derive(Default)]
struct GroupSeries {
    sales: Vec<f64>,
    quantity: Vec<f64>,
    stock_value: f64,
    stock: f64,
}

/// Turnover per group over a window table (see [`trailing_window`]).
///
/// Sales and quantity are summed per (month, group); stock figures are the
/// last ones seen, since stock is a snapshot repeated on every row.
/// Averages are taken over the months in which the group has orders.
pub fn turnover_table(
    window: &SalesTable,
    group: Dimension,
    basis: TurnoverBasis,
    months: u32,
) -> TurnoverTable {
    let mut buckets: BTreeMap<(u32, &str), MonthBucket> = BTreeMap::new();
    for t in window.rows() {
        let bucket = buckets
            .entry((t.order_date.month(), t.dimension(group)))
            .or_default();
        bucket.sales += t.sales;
        bucket.quantity += t.quantity;
        bucket.stock_value = t.stock_value;
        bucket.stock = t.stock;
    }

    // Buckets iterate in month order, so series and "last" follow the calendar
    let mut series: BTreeMap<&str, GroupSeries> = BTreeMap::new();
    for ((_, key), bucket) in buckets {
        let s = series.entry(key).or_default();
        s.sales.push(bucket.sales);
        s.quantity.push(bucket.quantity);
        s.stock_value = bucket.stock_value;
        s.stock = bucket.stock;
    }

    let rows = series
        .into_iter()
        .map(|(key, s)| {
            let avg_sales = mean(&s.sales);
            let avg_quantity = mean(&s.quantity);
            let dollar_turnover = turnover_days(s.stock_value, avg_sales);
            let unit_turnover = turnover_days(s.stock, avg_quantity);
            let status = classify_turnover(match basis {
                TurnoverBasis::Dollar => dollar_turnover,
                TurnoverBasis::Unit => unit_turnover,
            });

            TurnoverRow {
                group: key.to_string(),
                sales: s.sales,
                avg_sales,
                quantity: s.quantity,
                avg_quantity,
                stock_value: s.stock_value,
                stock: s.stock,
                dollar_turnover,
                unit_turnover,
                status,
            }
        })
        .collect();

    TurnoverTable {
        dimension: group,
        basis,
        months,
        labels: TurnoverLabels::for_months(months),
        rows,
    }
}
