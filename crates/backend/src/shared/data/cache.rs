use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use super::dataset::SalesTable;
use crate::shared::error::Result;

static DATASET_CACHE: Lazy<DatasetCache> = Lazy::new(DatasetCache::new);

/// Process-wide cache shared by the server.
pub fn global() -> &'static DatasetCache {
    &DATASET_CACHE
}

/// Loaded tables keyed by file path.
///
/// Tables are handed out as `Arc<SalesTable>` and never mutated; a reload
/// replaces the handle, readers holding the old one keep a consistent table.
#[derive(Debug, Default)]
pub struct DatasetCache {
    tables: RwLock<HashMap<PathBuf, Arc<SalesTable>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached table for `path`, if it has been loaded.
    pub fn get(&self, path: &Path) -> Option<Arc<SalesTable>> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        tables.get(path).cloned()
    }

    /// Cached table for `path`, reading the file on first use.
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<SalesTable>> {
        if let Some(table) = self.get(path) {
            return Ok(table);
        }

        let loaded = Arc::new(SalesTable::load(path)?);
        tracing::info!("Dataset loaded from {}: {} rows", path.display(), loaded.len());

        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have finished loading first; keep its handle.
        let table = tables.entry(path.to_path_buf()).or_insert(loaded);
        Ok(Arc::clone(table))
    }

    /// Re-read `path` and swap the cached handle.
    ///
    /// On failure the previously cached table stays in place.
    pub fn reload(&self, path: &Path) -> Result<Arc<SalesTable>> {
        let loaded = Arc::new(SalesTable::load(path)?);
        tracing::info!(
            "Dataset reloaded from {}: {} rows",
            path.display(),
            loaded.len()
        );

        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        tables.insert(path.to_path_buf(), Arc::clone(&loaded));
        Ok(loaded)
    }
}
