use contracts::dashboards::d400_overview::{OverviewRequest, OverviewResponse};
use contracts::shared::columns::{Dimension, DisplayCategory, Measure};

use crate::shared::config::ReferenceConfig;
use crate::shared::data::dataset::SalesTable;
use crate::shared::error::{DashboardError, Result};
use crate::shared::indicators::overview::{bounded_window, monthly_trend, proportion_tree};

/// Metrics offered on the overview page
const OVERVIEW_METRICS: [Measure; 3] = [Measure::Sales, Measure::Profit, Measure::Cost];

/// Dimension paths of the proportion charts
const PROPORTION_PATHS: [&[Dimension]; 3] = [
    &[Dimension::Category, Dimension::Subcategory],
    &[Dimension::Team, Dimension::Buyer],
    &[Dimension::Brand],
];

/// Get overview: proportions within the selected dates and monthly trends
pub fn get_overview(
    table: &SalesTable,
    reference: &ReferenceConfig,
    request: OverviewRequest,
) -> Result<OverviewResponse> {
    let metric = request.metric;
    if !OVERVIEW_METRICS.contains(&metric) {
        return Err(DashboardError::InvalidColumn(format!(
            "{metric} is not an overview metric"
        )));
    }

    // По умолчанию: от начала данных до опорной даты
    let date_from = request.date_from.unwrap_or(reference.date_min);
    let date_to = request.date_to.unwrap_or(reference.date);
    let window = bounded_window(date_from, date_to, reference.date_min, reference.date)?;

    let proportions = PROPORTION_PATHS
        .iter()
        .map(|path| proportion_tree(table, window, path, metric))
        .collect();

    let trends = DisplayCategory::ALL
        .iter()
        .map(|category| monthly_trend(table, category.dimension(), metric))
        .collect();

    Ok(OverviewResponse {
        metric,
        date_from,
        date_to,
        proportions,
        trends,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::fixtures::{date, table, Tx};

    fn reference() -> ReferenceConfig {
        ReferenceConfig {
            date: date(2024, 9, 30),
            date_min: date(2023, 1, 1),
            date_max: date(2024, 12, 31),
        }
    }

    fn request(metric: Measure) -> OverviewRequest {
        OverviewRequest {
            metric,
            date_from: None,
            date_to: None,
        }
    }

    #[test]
    fn test_overview_defaults_to_reference_bounds() {
        let t = table(vec![
            Tx::on(date(2024, 3, 1)).team("7"),
            Tx::on(date(2024, 10, 1)).team("8"),
        ]);
        let response = get_overview(&t, &reference(), request(Measure::Profit)).unwrap();

        assert_eq!(response.date_from, date(2023, 1, 1));
        assert_eq!(response.date_to, date(2024, 9, 30));
        assert_eq!(response.proportions.len(), 3);
        assert_eq!(response.trends.len(), 3);

        // October is past the reference date: only team 7 in the proportions
        let teams = &response.proportions[1];
        assert_eq!(teams.rows.len(), 1);
        assert_eq!(teams.rows[0].children[0].values["BuyerName"].as_text(), Some("Ann Lee"));

        // Trends cover the whole table
        assert_eq!(response.trends[1].dimension, Dimension::Team);
        assert_eq!(response.trends[1].points.len(), 2);
    }

    #[test]
    fn test_overview_rejects_bad_input() {
        let t = table(vec![Tx::on(date(2024, 3, 1))]);
        assert!(matches!(
            get_overview(&t, &reference(), request(Measure::Stock)),
            Err(DashboardError::InvalidColumn(_))
        ));

        let mut reversed = request(Measure::Sales);
        reversed.date_from = Some(date(2024, 5, 1));
        reversed.date_to = Some(date(2024, 4, 1));
        assert!(matches!(
            get_overview(&t, &reference(), reversed),
            Err(DashboardError::DateRange(_))
        ));
    }
}
