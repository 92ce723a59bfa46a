use chrono::NaiveDate;
use contracts::shared::columns::{Dimension, Measure};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use crate::shared::error::{DashboardError, Result};

/// Columns that must be present in the dataset header.
pub const REQUIRED_COLUMNS: [&str; 13] = [
    "OrderDate",
    "CategoryName",
    "SubcategoryName",
    "TeamID",
    "BuyerFirstName",
    "BuyerLastName",
    "BrandName",
    "ProductName",
    "UnitPrice",
    "Discount",
    "Quantity",
    "Cost",
    "Stock",
];

/// Date format of the `OrderDate` column, e.g. `09/30/24`.
pub const ORDER_DATE_FORMAT: &str = "%m/%d/%y";

/// One line of the CSV export, as stored in the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawTransaction {
    #[serde(deserialize_with = "deserialize_order_date")]
    pub order_date: NaiveDate,
    pub category_name: String,
    pub subcategory_name: String,
    #[serde(rename = "TeamID")]
    pub team_id: String,
    pub buyer_first_name: String,
    pub buyer_last_name: String,
    pub brand_name: String,
    pub product_name: String,
    pub unit_price: f64,
    pub discount: f64,
    pub quantity: f64,
    pub cost: f64,
    /// On-hand units at export time, repeated on every row of the product
    pub stock: f64,
}

fn deserialize_order_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(s.trim(), ORDER_DATE_FORMAT).map_err(|e| {
        serde::de::Error::custom(format!(
            "invalid OrderDate '{s}' (expected MM/DD/YY): {e}"
        ))
    })
}

/// Order line with the derived measures.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub order_date: NaiveDate,
    pub category_name: String,
    pub subcategory_name: String,
    pub team_id: String,
    pub buyer_first_name: String,
    pub buyer_last_name: String,
    pub brand_name: String,
    pub product_name: String,
    pub unit_price: f64,
    pub discount: f64,
    pub quantity: f64,
    pub cost: f64,
    pub stock: f64,
    /// (UnitPrice - Discount) * Quantity
    pub sales: f64,
    /// (UnitPrice - Discount) * Stock
    pub stock_value: f64,
    /// Sales - Cost * Quantity
    pub profit: f64,
    pub buyer_name: String,
}

impl From<RawTransaction> for Transaction {
    fn from(raw: RawTransaction) -> Self {
        let net_price = raw.unit_price - raw.discount;
        let sales = net_price * raw.quantity;
        let stock_value = net_price * raw.stock;
        let profit = sales - raw.cost * raw.quantity;
        let buyer_name = format!("{} {}", raw.buyer_first_name, raw.buyer_last_name);

        Self {
            order_date: raw.order_date,
            category_name: raw.category_name,
            subcategory_name: raw.subcategory_name,
            team_id: raw.team_id,
            buyer_first_name: raw.buyer_first_name,
            buyer_last_name: raw.buyer_last_name,
            brand_name: raw.brand_name,
            product_name: raw.product_name,
            unit_price: raw.unit_price,
            discount: raw.discount,
            quantity: raw.quantity,
            cost: raw.cost,
            stock: raw.stock,
            sales,
            stock_value,
            profit,
            buyer_name,
        }
    }
}

impl Transaction {
    pub fn dimension(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Category => &self.category_name,
            Dimension::Subcategory => &self.subcategory_name,
            Dimension::Team => &self.team_id,
            Dimension::Buyer => &self.buyer_name,
            Dimension::Brand => &self.brand_name,
            Dimension::Product => &self.product_name,
        }
    }

    pub fn measure(&self, measure: Measure) -> f64 {
        match measure {
            Measure::Sales => self.sales,
            Measure::Profit => self.profit,
            Measure::Cost => self.cost,
            Measure::Quantity => self.quantity,
            Measure::StockValue => self.stock_value,
            Measure::Stock => self.stock,
        }
    }
}

/// Immutable in-memory transaction table, rows kept in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTable {
    rows: Vec<Transaction>,
}

impl SalesTable {
    pub fn from_rows(rows: Vec<Transaction>) -> Self {
        Self { rows }
    }

    /// Read and parse a CSV export.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| {
            DashboardError::data_load(format!("cannot open {}: {e}", path.display()))
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        // The reader strips a leading UTF-8 BOM from the header row
        let headers = reader
            .headers()
            .map_err(|e| DashboardError::data_load(format!("failed to read CSV headers: {e}")))?;
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|c| !headers.iter().any(|h| h == **c))
        {
            return Err(DashboardError::data_load(format!(
                "required column '{missing}' is missing"
            )));
        }

        let mut rows = Vec::new();
        for result in reader.deserialize::<RawTransaction>() {
            let raw = result.map_err(|e| DashboardError::data_load(e.to_string()))?;
            rows.push(Transaction::from(raw));
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Copy of the rows matching `predicate`, in the same order.
    pub fn filter<F>(&self, predicate: F) -> SalesTable
    where
        F: Fn(&Transaction) -> bool,
    {
        SalesTable {
            rows: self.rows.iter().filter(|t| predicate(t)).cloned().collect(),
        }
    }

    /// Rows whose `dimension` equals `value`.
    pub fn filter_eq(&self, dimension: Dimension, value: &str) -> SalesTable {
        self.filter(|t| t.dimension(dimension) == value)
    }

    /// Sorted unique values of a dimension.
    pub fn distinct_values(&self, dimension: Dimension) -> Vec<String> {
        self.rows
            .iter()
            .map(|t| t.dimension(dimension))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// First and last order date.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.rows.iter().map(|t| t.order_date).min()?;
        let max = self.rows.iter().map(|t| t.order_date).max()?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "OrderDate,CategoryName,SubcategoryName,TeamID,BuyerFirstName,BuyerLastName,BrandName,ProductName,UnitPrice,Discount,Quantity,Cost,Stock";

    fn two_row_csv() -> String {
        format!(
            "{HEADER}\n\
             01/15/24,Shoes,Sneakers,1,Ann,Lee,Acme,Runner,100,10,2,50,5\n\
             01/15/23,Shoes,Sneakers,1,Ann,Lee,Acme,Runner,100,10,2,50,5\n"
        )
    }

    #[test]
    fn test_derived_columns() {
        let table = SalesTable::from_reader(two_row_csv().as_bytes()).unwrap();
        assert_eq!(table.len(), 2);

        let row = &table.rows()[0];
        assert_eq!(row.order_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(row.sales, 180.0);
        assert_eq!(row.stock_value, 450.0);
        assert_eq!(row.profit, 80.0);
        assert_eq!(row.buyer_name, "Ann Lee");
        assert_eq!(table.rows()[1].sales, 180.0);
        assert_eq!(
            table.rows()[1].order_date,
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_missing_column_is_data_load_error() {
        let csv = "OrderDate,CategoryName\n01/15/24,Shoes\n";
        let err = SalesTable::from_reader(csv.as_bytes()).unwrap_err();
        match err {
            DashboardError::DataLoad(msg) => assert!(msg.contains("SubcategoryName")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_date_is_data_load_error() {
        let csv = format!("{HEADER}\n2024-01-15,Shoes,Sneakers,1,Ann,Lee,Acme,Runner,100,10,2,50,5\n");
        let err = SalesTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DashboardError::DataLoad(_)));
    }

    #[test]
    fn test_missing_file_is_data_load_error() {
        let err = SalesTable::load(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DashboardError::DataLoad(_)));
    }

    #[test]
    fn test_load_from_file_with_bom_and_extra_column() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "\u{FEFF}{HEADER},Region\n03/02/24,Bags,Totes,7,Bo,Chan,Zeta,Tote,20,0,3,8,11,North\n"
        )
        .unwrap();

        let table = SalesTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].team_id, "7");
        assert_eq!(table.rows()[0].sales, 60.0);
    }

    #[test]
    fn test_distinct_values_and_span() {
        let table = SalesTable::from_reader(two_row_csv().as_bytes()).unwrap();
        assert_eq!(table.distinct_values(Dimension::Brand), vec!["Acme"]);
        let (from, to) = table.date_span().unwrap();
        assert_eq!(from.to_string(), "2023-01-15");
        assert_eq!(to.to_string(), "2024-01-15");
        assert!(SalesTable::default().date_span().is_none());
    }
}
