use std::path::PathBuf;
use std::sync::Arc;

use crate::shared::config::{Config, ReferenceConfig};
use crate::shared::data::cache::{self, DatasetCache};
use crate::shared::data::dataset::SalesTable;
use crate::shared::error::Result;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Resolved dataset location
    pub data_path: PathBuf,
    pub cache: &'static DatasetCache,
}

impl AppState {
    pub fn new(config: Config, data_path: PathBuf) -> Self {
        Self {
            config: Arc::new(config),
            data_path,
            cache: cache::global(),
        }
    }

    pub fn reference(&self) -> &ReferenceConfig {
        &self.config.reference
    }

    /// Current table, loaded on first use
    pub fn table(&self) -> Result<Arc<SalesTable>> {
        self.cache.get_or_load(&self.data_path)
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "OrderDate,CategoryName,SubcategoryName,TeamID,BuyerFirstName,BuyerLastName,BrandName,ProductName,UnitPrice,Discount,Quantity,Cost,Stock";

    /// State over a temporary dataset file; keep the file alive while testing.
    pub fn state_with_rows(rows: &[&str]) -> (AppState, tempfile::NamedTempFile) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        file.flush().unwrap();

        let config = crate::shared::config::load_config().unwrap();
        let state = AppState::new(config, file.path().to_path_buf());
        (state, file)
    }
}
