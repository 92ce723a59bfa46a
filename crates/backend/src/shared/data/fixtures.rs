use chrono::NaiveDate;

use super::dataset::{RawTransaction, SalesTable, Transaction};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Order line builder with neutral defaults.
#[derive(Debug, Clone)]
pub struct Tx {
    raw: RawTransaction,
}

impl Tx {
    pub fn on(order_date: NaiveDate) -> Self {
        Self {
            raw: RawTransaction {
                order_date,
                category_name: "Shoes".to_string(),
                subcategory_name: "Sneakers".to_string(),
                team_id: "1".to_string(),
                buyer_first_name: "Ann".to_string(),
                buyer_last_name: "Lee".to_string(),
                brand_name: "Acme".to_string(),
                product_name: "Runner".to_string(),
                unit_price: 100.0,
                discount: 10.0,
                quantity: 2.0,
                cost: 50.0,
                stock: 5.0,
            },
        }
    }

    pub fn category(mut self, v: &str) -> Self {
        self.raw.category_name = v.to_string();
        self
    }

    pub fn subcategory(mut self, v: &str) -> Self {
        self.raw.subcategory_name = v.to_string();
        self
    }

    pub fn team(mut self, v: &str) -> Self {
        self.raw.team_id = v.to_string();
        self
    }

    pub fn brand(mut self, v: &str) -> Self {
        self.raw.brand_name = v.to_string();
        self
    }

    pub fn product(mut self, v: &str) -> Self {
        self.raw.product_name = v.to_string();
        self
    }

    /// Unit price with no discount
    pub fn price(mut self, v: f64) -> Self {
        self.raw.unit_price = v;
        self.raw.discount = 0.0;
        self
    }

    pub fn quantity(mut self, v: f64) -> Self {
        self.raw.quantity = v;
        self
    }

    pub fn cost(mut self, v: f64) -> Self {
        self.raw.cost = v;
        self
    }

    pub fn stock(mut self, v: f64) -> Self {
        self.raw.stock = v;
        self
    }

    pub fn build(self) -> Transaction {
        Transaction::from(self.raw)
    }
}

pub fn table(rows: Vec<Tx>) -> SalesTable {
    SalesTable::from_rows(rows.into_iter().map(Tx::build).collect())
}
