//! The enriched dataset and its process-wide cache

use crate::derive::derive_features;
use crate::loader::read_records;
use crate::record::EnrichedRecord;
use bakegraph_common::Result;
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// The enriched dataset, read-only after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<EnrichedRecord>,
}

impl Dataset {
    pub fn new(records: Vec<EnrichedRecord>) -> Self {
        Self { records }
    }

    /// Read the export at `path` and run the derivation pass.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = read_records(path)?;
        let enriched = derive_features(raw)?;
        Ok(Self::new(enriched))
    }

    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct product names in the dataset.
    pub fn distinct_item_count(&self) -> usize {
        self.records
            .iter()
            .map(|record| record.items.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Process-wide dataset cell, populated on first access.
static DATASET: OnceCell<Arc<Dataset>> = OnceCell::new();

/// Process-wide dataset accessor.
///
/// The first caller performs the load-and-derive pass; concurrent first
/// accesses are single-flight and every later caller only reads the cached
/// result. A failed load leaves the cell empty so a corrected path can be
/// retried. The cache is keyed by nothing: the first successfully loaded
/// file wins for the lifetime of the process.
pub fn dataset(path: impl AsRef<Path>) -> Result<Arc<Dataset>> {
    let cached = DATASET.get_or_try_init(|| -> Result<Arc<Dataset>> {
        let dataset = Dataset::load(path.as_ref())?;
        info!("Cached enriched dataset with {} rows", dataset.len());
        Ok(Arc::new(dataset))
    })?;
    Ok(Arc::clone(cached))
}
