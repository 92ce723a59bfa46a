//! Aggregations over the transaction table.
//!
//! Every function here is pure: it reads a `SalesTable` and returns a new
//! result table, nothing is cached or mutated.

pub mod growth;
pub mod heatmap;
pub mod overview;
pub mod period_metric;
pub mod periods;
pub mod turnover;
