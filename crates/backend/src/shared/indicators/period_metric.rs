use contracts::shared::columns::{Dimension, Measure};
use contracts::shared::indicators::{
    GroupedMetric, GroupedMetricRow, PeriodBreakdown, PeriodBreakdownRow, PeriodMetricRow,
    PeriodMetricTable, PeriodRange,
};
use std::collections::{BTreeMap, HashMap};

use super::growth::growth;
use super::periods::{DateWindow, PeriodFilters};
use crate::shared::data::dataset::SalesTable;

/// Sum of `measure` over rows inside `window`; 0 when nothing matches.
pub fn sum_in_window(table: &SalesTable, measure: Measure, window: DateWindow) -> f64 {
    table
        .rows()
        .iter()
        .filter(|t| window.contains(t.order_date))
        .map(|t| t.measure(measure))
        .sum()
}

/// YTD / QTD / MTD totals against the prior-year windows.
pub fn scalar_period_metric(
    table: &SalesTable,
    measure: Measure,
    filters: &PeriodFilters,
) -> PeriodMetricTable {
    let rows = PeriodRange::ALL
        .into_iter()
        .map(|range| {
            let current_period = sum_in_window(table, measure, filters.current(range));
            let last_period = sum_in_window(table, measure, filters.prior(range));
            PeriodMetricRow {
                range,
                current_period,
                last_period,
                growth: growth(current_period, Some(last_period)),
            }
        })
        .collect();

    PeriodMetricTable {
        measure: measure.column_name().to_string(),
        rows,
    }
}

#[derive(Default)]
struct GroupSums {
    current: Option<f64>,
    prior: Option<f64>,
}

/// Current-period totals and growth per group value.
///
/// Only groups with rows in the current window are reported; a group seen
/// only in the prior window is dropped. A row inside both windows counts
/// as current.
pub fn grouped_period_metric(
    table: &SalesTable,
    measure: Measure,
    dimension: Dimension,
    range: PeriodRange,
    current: DateWindow,
    prior: DateWindow,
) -> GroupedMetric {
    let mut groups: BTreeMap<&str, GroupSums> = BTreeMap::new();

    for t in table.rows() {
        let is_current = current.contains(t.order_date);
        if !is_current && !prior.contains(t.order_date) {
            continue;
        }
        let sums = groups.entry(t.dimension(dimension)).or_default();
        let slot = if is_current {
            &mut sums.current
        } else {
            &mut sums.prior
        };
        *slot.get_or_insert(0.0) += t.measure(measure);
    }

    let rows: Vec<GroupedMetricRow> = groups
        .into_iter()
        .filter_map(|(group, sums)| {
            let current = sums.current?;
            Some(GroupedMetricRow {
                group: group.to_string(),
                current,
                growth: growth(current, sums.prior),
            })
        })
        .collect();

    if rows.is_empty() {
        return GroupedMetric::NoData;
    }

    GroupedMetric::Rows {
        dimension,
        range,
        rows,
    }
}

/// Grouped metric for `range` using the matching windows of `filters`.
pub fn grouped_for_range(
    table: &SalesTable,
    measure: Measure,
    dimension: Dimension,
    range: PeriodRange,
    filters: &PeriodFilters,
) -> GroupedMetric {
    grouped_period_metric(
        table,
        measure,
        dimension,
        range,
        filters.current(range),
        filters.prior(range),
    )
}

/// YTD, QTD and MTD grouped metrics joined on the group key.
///
/// Rows follow the YTD result. Groups without QTD or MTD activity get empty
/// cells for that period.
pub fn period_breakdown(
    table: &SalesTable,
    measure: Measure,
    dimension: Dimension,
    filters: &PeriodFilters,
) -> PeriodBreakdown {
    let ytd = grouped_for_range(table, measure, dimension, PeriodRange::Ytd, filters);
    if ytd.is_no_data() {
        return PeriodBreakdown::NoData;
    }

    let index = |metric: GroupedMetric| -> HashMap<String, GroupedMetricRow> {
        match metric {
            GroupedMetric::Rows { rows, .. } => {
                rows.into_iter().map(|r| (r.group.clone(), r)).collect()
            }
            GroupedMetric::NoData => HashMap::new(),
        }
    };
    let qtd = index(grouped_for_range(table, measure, dimension, PeriodRange::Qtd, filters));
    let mtd = index(grouped_for_range(table, measure, dimension, PeriodRange::Mtd, filters));

    let rows = ytd
        .rows()
        .iter()
        .map(|y| {
            let q = qtd.get(&y.group);
            let m = mtd.get(&y.group);
            PeriodBreakdownRow {
                group: y.group.clone(),
                ytd: y.current,
                ytd_growth: y.growth,
                qtd: q.map(|r| r.current),
                qtd_growth: q.and_then(|r| r.growth),
                mtd: m.map(|r| r.current),
                mtd_growth: m.and_then(|r| r.growth),
            }
        })
        .collect();

    PeriodBreakdown::Rows { dimension, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::fixtures::{date, table, Tx};

    #[test]
    fn test_two_row_fixture_end_to_end() {
        let t = table(vec![Tx::on(date(2024, 1, 15)), Tx::on(date(2023, 1, 15))]);
        assert!(t.rows().iter().all(|r| r.sales == 180.0));

        let filters = PeriodFilters::build(2024, 1, 15).unwrap();
        let metric = scalar_period_metric(&t, Measure::Sales, &filters);

        let ytd = metric.row(PeriodRange::Ytd).unwrap();
        assert_eq!(ytd.current_period, 180.0);
        assert_eq!(ytd.last_period, 180.0);
        assert_eq!(ytd.growth, Some(0.0));
        assert_eq!(metric.measure, "Sales");
        assert_eq!(metric.rows.len(), 3);
    }

    #[test]
    fn test_empty_windows_sum_to_zero_with_undefined_growth() {
        let t = table(vec![Tx::on(date(2024, 1, 15))]);
        let filters = PeriodFilters::build(2024, 6, 15).unwrap();
        let metric = scalar_period_metric(&t, Measure::Profit, &filters);

        let mtd = metric.row(PeriodRange::Mtd).unwrap();
        assert_eq!(mtd.current_period, 0.0);
        assert_eq!(mtd.last_period, 0.0);
        assert_eq!(mtd.growth, None);

        let ytd = metric.row(PeriodRange::Ytd).unwrap();
        assert_eq!(ytd.current_period, 80.0);
        assert_eq!(ytd.growth, None);
    }

    #[test]
    fn test_ytd_not_below_mtd_for_non_negative_measures() {
        let t = table(vec![
            Tx::on(date(2024, 1, 3)).quantity(1.0),
            Tx::on(date(2024, 3, 9)).quantity(4.0),
            Tx::on(date(2024, 3, 20)).quantity(2.0),
            Tx::on(date(2024, 2, 11)).quantity(7.0),
            Tx::on(date(2023, 3, 5)).quantity(3.0),
        ]);
        for day in [1, 10, 20, 31] {
            let filters = PeriodFilters::build(2024, 3, day).unwrap();
            for measure in [Measure::Sales, Measure::Quantity, Measure::Cost] {
                let m = scalar_period_metric(&t, measure, &filters);
                let ytd = m.row(PeriodRange::Ytd).unwrap().current_period;
                let qtd = m.row(PeriodRange::Qtd).unwrap().current_period;
                let mtd = m.row(PeriodRange::Mtd).unwrap().current_period;
                assert!(ytd >= qtd && qtd >= mtd);
            }
        }
    }

    #[test]
    fn test_grouped_drops_groups_absent_from_current() {
        let t = table(vec![
            Tx::on(date(2024, 2, 1)).subcategory("Boots").price(50.0).quantity(1.0),
            Tx::on(date(2023, 2, 1)).subcategory("Boots").price(25.0).quantity(1.0),
            Tx::on(date(2024, 2, 2)).subcategory("Sandals").price(10.0).quantity(1.0),
            Tx::on(date(2023, 2, 2)).subcategory("Heels").price(99.0).quantity(1.0),
        ]);
        let filters = PeriodFilters::build(2024, 2, 28).unwrap();
        let metric = grouped_for_range(
            &t,
            Measure::Sales,
            Dimension::Subcategory,
            PeriodRange::Ytd,
            &filters,
        );

        let rows = metric.rows();
        let groups: Vec<&str> = rows.iter().map(|r| r.group.as_str()).collect();
        assert_eq!(groups, vec!["Boots", "Sandals"]);
        assert_eq!(rows[0].current, 50.0);
        assert_eq!(rows[0].growth, Some(1.0));
        assert_eq!(rows[1].current, 10.0);
        assert_eq!(rows[1].growth, None);
    }

    #[test]
    fn test_grouped_no_data_sentinel() {
        let t = table(vec![Tx::on(date(2023, 2, 1))]);
        let filters = PeriodFilters::build(2024, 2, 28).unwrap();
        let metric = grouped_for_range(
            &t,
            Measure::Sales,
            Dimension::Brand,
            PeriodRange::Mtd,
            &filters,
        );
        assert_eq!(metric, GroupedMetric::NoData);
    }

    #[test]
    fn test_breakdown_joins_periods() {
        let t = table(vec![
            Tx::on(date(2024, 1, 10)).brand("Acme").price(10.0).quantity(1.0),
            Tx::on(date(2024, 5, 10)).brand("Acme").price(20.0).quantity(1.0),
            Tx::on(date(2024, 5, 12)).brand("Bolt").price(5.0).quantity(1.0),
            Tx::on(date(2023, 5, 11)).brand("Bolt").price(10.0).quantity(1.0),
        ]);
        let filters = PeriodFilters::build(2024, 5, 20).unwrap();

        let PeriodBreakdown::Rows { dimension, rows } =
            period_breakdown(&t, Measure::Sales, Dimension::Brand, &filters)
        else {
            panic!("expected rows");
        };
        assert_eq!(dimension, Dimension::Brand);
        assert_eq!(rows.len(), 2);

        let acme = &rows[0];
        assert_eq!(acme.group, "Acme");
        assert_eq!(acme.ytd, 30.0);
        assert_eq!(acme.mtd, Some(20.0));
        assert_eq!(acme.mtd_growth, None);

        let bolt = &rows[1];
        assert_eq!(bolt.ytd, 5.0);
        assert_eq!(bolt.ytd_growth, Some(-0.5));
        assert_eq!(bolt.qtd, Some(5.0));
        assert_eq!(bolt.mtd_growth, Some(-0.5));
    }

    #[test]
    fn test_breakdown_leaves_inactive_periods_empty() {
        let t = table(vec![Tx::on(date(2024, 1, 10)).brand("Acme")]);
        let filters = PeriodFilters::build(2024, 5, 20).unwrap();

        let PeriodBreakdown::Rows { rows, .. } =
            period_breakdown(&t, Measure::Sales, Dimension::Brand, &filters)
        else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].ytd, 180.0);
        assert_eq!(rows[0].qtd, None);
        assert_eq!(rows[0].mtd, None);
    }

    #[test]
    fn test_breakdown_no_data_without_ytd_rows() {
        let t = table(vec![Tx::on(date(2022, 1, 10))]);
        let filters = PeriodFilters::build(2024, 5, 20).unwrap();
        assert_eq!(
            period_breakdown(&t, Measure::Sales, Dimension::Brand, &filters),
            PeriodBreakdown::NoData
        );
    }
}
