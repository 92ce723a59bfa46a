use contracts::dashboards::d402_inventory::{TurnoverRequest, TurnoverResponse};
use contracts::shared::columns::Dimension;
use contracts::shared::indicators::TurnoverBasis;

use crate::shared::config::ReferenceConfig;
use crate::shared::data::dataset::SalesTable;
use crate::shared::error::{DashboardError, Result};
use crate::shared::indicators::turnover::{trailing_window, turnover_table};

/// Get turnover of a category by brand, and of one brand by product
pub fn get_turnover(
    table: &SalesTable,
    reference: &ReferenceConfig,
    request: TurnoverRequest,
) -> Result<TurnoverResponse> {
    let months = request.months;
    let window = trailing_window(table, reference.date, months)?;
    let category = window.filter_eq(Dimension::Category, &request.category);
    if category.is_empty() {
        return Err(DashboardError::no_data(format!(
            "no orders for category '{}' in the last {months} months",
            request.category
        )));
    }

    let brands = category.distinct_values(Dimension::Brand);
    let by_brand = turnover_table(&category, Dimension::Brand, TurnoverBasis::Dollar, months);

    // Без выбранного бренда берём первый по алфавиту
    let brand = match request.brand {
        Some(brand) if !brands.contains(&brand) => {
            return Err(DashboardError::no_data(format!(
                "brand '{brand}' has no orders in category '{}'",
                request.category
            )));
        }
        Some(brand) => Some(brand),
        None => brands.first().cloned(),
    };

    let by_product = brand.as_deref().map(|b| {
        let products = category.filter_eq(Dimension::Brand, b);
        turnover_table(&products, Dimension::Product, TurnoverBasis::Unit, months)
    });

    Ok(TurnoverResponse {
        months,
        category: request.category,
        brands,
        by_brand,
        brand,
        by_product,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::fixtures::{date, table, Tx};
    use contracts::shared::indicators::TurnoverStatus;

    fn reference() -> ReferenceConfig {
        ReferenceConfig {
            date: date(2024, 9, 30),
            date_min: date(2023, 1, 1),
            date_max: date(2024, 12, 31),
        }
    }

    fn fixture() -> SalesTable {
        table(vec![
            Tx::on(date(2024, 8, 1)).brand("Bolt").product("Pump").price(10.0).quantity(3.0).stock(1.0),
            Tx::on(date(2024, 9, 1)).brand("Acme").product("Runner").price(100.0).quantity(1.0).stock(3.0),
            Tx::on(date(2024, 9, 5)).brand("Acme").product("Trail").price(100.0).quantity(1.0).stock(3.0),
            Tx::on(date(2024, 9, 5)).brand("Zed").category("Bags"),
            Tx::on(date(2024, 1, 5)).brand("Old"),
        ])
    }

    fn request(brand: Option<&str>) -> TurnoverRequest {
        TurnoverRequest {
            months: 3,
            category: "Shoes".to_string(),
            brand: brand.map(str::to_string),
        }
    }

    #[test]
    fn test_turnover_defaults_to_first_brand() {
        let response = get_turnover(&fixture(), &reference(), request(None)).unwrap();

        assert_eq!(response.brands, vec!["Acme", "Bolt"]);
        assert_eq!(response.by_brand.basis, TurnoverBasis::Dollar);
        assert_eq!(response.by_brand.rows.len(), 2);
        assert_eq!(response.brand.as_deref(), Some("Acme"));

        let products = response.by_product.unwrap();
        assert_eq!(products.basis, TurnoverBasis::Unit);
        let names: Vec<&str> = products.rows.iter().map(|r| r.group.as_str()).collect();
        assert_eq!(names, vec!["Runner", "Trail"]);
        // 3 units in stock against 1 unit a month
        assert_eq!(products.rows[0].unit_turnover, Some(90.0));
        assert_eq!(products.rows[0].status, TurnoverStatus::Frozen);
    }

    #[test]
    fn test_turnover_for_chosen_brand() {
        let response = get_turnover(&fixture(), &reference(), request(Some("Bolt"))).unwrap();
        let products = response.by_product.unwrap();
        assert_eq!(products.rows.len(), 1);
        assert_eq!(products.rows[0].group, "Pump");
        assert_eq!(products.rows[0].unit_turnover, Some(10.0));
        assert_eq!(products.rows[0].status, TurnoverStatus::Critical);
    }

    #[test]
    fn test_turnover_errors() {
        assert!(matches!(
            get_turnover(&fixture(), &reference(), request(Some("Zed"))),
            Err(DashboardError::NoData(_))
        ));

        let mut toys = request(None);
        toys.category = "Toys".to_string();
        assert!(matches!(
            get_turnover(&fixture(), &reference(), toys),
            Err(DashboardError::NoData(_))
        ));

        let mut too_long = request(None);
        too_long.months = 10;
        assert!(matches!(
            get_turnover(&fixture(), &reference(), too_long),
            Err(DashboardError::DateRange(_))
        ));
    }
}
