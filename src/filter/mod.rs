//! Filter engine.
//!
//! A pure function of (records, filters): text search on name, tag
//! membership, and size range. Baseline records are excluded from the
//! filterable pool and re-attached afterwards by [`pin_baselines`], pinned
//! ahead of every other row. Filtering never reorders; ordering belongs to
//! the sort engine.

mod range;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::schema::{BaselineKind, Record};

pub use range::{SizeRange, SIZE_STOPS, SIZE_STOP_LABELS};

/// How the selected tag set is matched against a record's tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMode {
    /// Keep records whose tag set intersects the selection (logical OR).
    #[default]
    Include,
    /// Keep only records whose tag set equals the selection exactly.
    Exclusive,
}

/// The active filter parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    /// Case-insensitive substring match against the record name.
    pub query: String,
    /// Selected tags; empty means no tag filtering.
    pub tags: BTreeSet<String>,
    pub tag_mode: TagMode,
    pub size_range: SizeRange,
}

impl Filters {
    fn matches(&self, record: &Record) -> bool {
        if !self.query.is_empty()
            && !record.name.to_lowercase().contains(&self.query.to_lowercase())
        {
            return false;
        }

        if !self.tags.is_empty() {
            let matched = match self.tag_mode {
                TagMode::Include => record.tags.iter().any(|t| self.tags.contains(t)),
                TagMode::Exclusive => record.tags == self.tags,
            };
            if !matched {
                return false;
            }
        }

        if !self.size_range.is_full() && !self.size_range.contains(record.size_count) {
            return false;
        }

        true
    }
}

/// Apply the filters, preserving input order. Baseline records are never
/// part of the filterable pool.
pub fn apply<'a>(records: &'a [Record], filters: &Filters) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|r| !r.is_baseline())
        .filter(|r| filters.matches(r))
        .collect()
}

/// Prepend the family's baseline records to a filtered view, instruct first,
/// then base. Baselines are pinned regardless of the filter outcome.
pub fn pin_baselines<'a>(records: &'a [Record], filtered: Vec<&'a Record>) -> Vec<&'a Record> {
    let mut pinned = Vec::with_capacity(filtered.len() + 2);
    for kind in [BaselineKind::Instruct, BaselineKind::Base] {
        if let Some(baseline) = records.iter().find(|r| r.baseline == Some(kind)) {
            pinned.push(baseline);
        }
    }
    pinned.extend(filtered);
    pinned
}
