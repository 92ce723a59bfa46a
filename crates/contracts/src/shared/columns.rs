use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a column name does not name a known dimension or measure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColumn(pub String);

impl fmt::Display for UnknownColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown column: {}", self.0)
    }
}

impl std::error::Error for UnknownColumn {}

// ---------------------------------------------------------------------------
// Grouping dimensions
// ---------------------------------------------------------------------------

/// Text column of the transaction table that can be used as a grouping key.
///
/// Serialized with the dataset column name (e.g. `"BrandName"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "CategoryName")]
    Category,
    #[serde(rename = "SubcategoryName")]
    Subcategory,
    #[serde(rename = "TeamID")]
    Team,
    #[serde(rename = "BuyerName")]
    Buyer,
    #[serde(rename = "BrandName")]
    Brand,
    #[serde(rename = "ProductName")]
    Product,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Category,
        Dimension::Subcategory,
        Dimension::Team,
        Dimension::Buyer,
        Dimension::Brand,
        Dimension::Product,
    ];

    /// Column name in the source file.
    pub fn column_name(&self) -> &'static str {
        match self {
            Dimension::Category => "CategoryName",
            Dimension::Subcategory => "SubcategoryName",
            Dimension::Team => "TeamID",
            Dimension::Buyer => "BuyerName",
            Dimension::Brand => "BrandName",
            Dimension::Product => "ProductName",
        }
    }

    /// Dimension used for heatmap rows once a value of `self` is selected:
    /// brand drills into subcategories, everything else drills into brands.
    pub fn complementary(&self) -> Dimension {
        match self {
            Dimension::Brand => Dimension::Subcategory,
            _ => Dimension::Brand,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Dimension {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.column_name() == s)
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Measures
// ---------------------------------------------------------------------------

/// Numeric column of the transaction table that can be summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measure {
    Sales,
    Profit,
    Cost,
    Quantity,
    StockValue,
    Stock,
}

impl Measure {
    pub fn column_name(&self) -> &'static str {
        match self {
            Measure::Sales => "Sales",
            Measure::Profit => "Profit",
            Measure::Cost => "Cost",
            Measure::Quantity => "Quantity",
            Measure::StockValue => "StockValue",
            Measure::Stock => "Stock",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

// ---------------------------------------------------------------------------
// Display categories
// ---------------------------------------------------------------------------

/// User-facing category selector ("Display by", "Breakdown by").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayCategory {
    Category,
    Team,
    Brand,
}

impl DisplayCategory {
    pub const ALL: [DisplayCategory; 3] = [
        DisplayCategory::Category,
        DisplayCategory::Team,
        DisplayCategory::Brand,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DisplayCategory::Category => "Category",
            DisplayCategory::Team => "Team",
            DisplayCategory::Brand => "Brand",
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            DisplayCategory::Category => Dimension::Category,
            DisplayCategory::Team => Dimension::Team,
            DisplayCategory::Brand => Dimension::Brand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_parses_column_names() {
        assert_eq!("BrandName".parse::<Dimension>(), Ok(Dimension::Brand));
        assert_eq!("TeamID".parse::<Dimension>(), Ok(Dimension::Team));
        assert!("Brand".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_dimension_serializes_as_column_name() {
        let json = serde_json::to_string(&Dimension::Subcategory).unwrap();
        assert_eq!(json, "\"SubcategoryName\"");
    }

    #[test]
    fn test_complementary_dimension() {
        assert_eq!(Dimension::Brand.complementary(), Dimension::Subcategory);
        assert_eq!(Dimension::Category.complementary(), Dimension::Brand);
        assert_eq!(Dimension::Team.complementary(), Dimension::Brand);
    }

    #[test]
    fn test_measure_query_names() {
        let metric: Measure = serde_json::from_str("\"StockValue\"").unwrap();
        assert_eq!(metric, Measure::StockValue);
        assert_eq!(metric.to_string(), "StockValue");
        assert!(serde_json::from_str::<Measure>("\"Revenue\"").is_err());
    }
}
