//! Data store: loading and holding the leaderboard dataset.
//!
//! The dataset is loaded once and held immutably; derived views never mutate
//! it. A failed load is absorbed into a synthetic fallback dataset so callers
//! always have data to render, with the error kept for display.

mod mock;


use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::schema::raw::RawRecord;
use crate::schema::Record;

pub use mock::{fallback_dataset, fallback_dataset_with_seed, FALLBACK_SEED};

/// The loaded leaderboard dataset: model-family id -> records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    families: BTreeMap<String, Vec<Record>>,
}

impl Dataset {
    /// Parse and normalize a dataset from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Dataset> {
        let raw: BTreeMap<String, Vec<RawRecord>> = serde_json::from_str(json)
            .map_err(|e| Error::Parse(format!("JSON deserialization failed: {e}")))?;
        Ok(Dataset::from_raw(raw))
    }

    /// Normalize wire records, assigning ids to records that carry none.
    /// Assigned ids start above the highest explicit id so they stay unique
    /// within the dataset.
    pub fn from_raw(raw: BTreeMap<String, Vec<RawRecord>>) -> Dataset {
        let max_explicit = raw
            .values()
            .flatten()
            .filter_map(|r| r.id)
            .max()
            .unwrap_or(0);
        let mut next_id = max_explicit + 1;

        let families = raw
            .into_iter()
            .map(|(family, records)| {
                let normalized = records
                    .into_iter()
                    .map(|r| {
                        let assigned = next_id;
                        if r.id.is_none() {
                            next_id += 1;
                        }
                        Record::from_raw(r, assigned)
                    })
                    .collect();
                (family, normalized)
            })
            .collect();

        Dataset { families }
    }

    /// Load a dataset from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Dataset> {
        let content = fs::read_to_string(path)?;
        Dataset::from_json_str(&content)
    }

    /// Load a dataset, substituting the synthetic fallback on any failure.
    ///
    /// The error is captured in the returned [`DataSource`] for display; the
    /// load is never retried.
    pub fn load_or_fallback(path: impl AsRef<Path>) -> Loaded {
        let path = path.as_ref();
        match Dataset::load(path) {
            Ok(dataset) => Loaded { dataset, source: DataSource::File(path.to_path_buf()) },
            Err(e) => Loaded {
                dataset: fallback_dataset(),
                source: DataSource::Fallback { error: e.to_string() },
            },
        }
    }

    /// Records of one model family; empty when the family key is absent.
    pub fn family(&self, id: &str) -> &[Record] {
        self.families.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Family ids, in sorted order.
    pub fn family_ids(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    /// Total number of records across all families.
    pub fn record_count(&self) -> usize {
        self.families.values().map(Vec::len).sum()
    }

    /// Whether the dataset holds no families at all.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

/// A dataset together with where it came from.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub dataset: Dataset,
    pub source: DataSource,
}

impl Loaded {
    /// The load error, when the fallback dataset was substituted.
    pub fn error(&self) -> Option<&str> {
        match &self.source {
            DataSource::File(_) => None,
            DataSource::Fallback { error } => Some(error),
        }
    }
}

/// Origin of a loaded dataset.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Parsed from the file at this path.
    File(PathBuf),
    /// Synthetic fallback substituted after a failed load.
    Fallback { error: String },
}
