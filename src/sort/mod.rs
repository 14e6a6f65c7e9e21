//! Sort engine: multi-key ordering of filtered records.
//!
//! Sorting operates on the baseline-free filtered view; baselines are pinned
//! by the view layer and never compared. Year carries a fixed secondary key:
//! equal years order by descending average, whatever direction was requested.

pub mod rank;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::schema::{Domain, Record};

/// Requested sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn flip(self) -> Direction {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

/// A sortable column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Tags,
    Year,
    /// Present in the table but not sortable; clicks are no-ops.
    Size,
    OverallAvg,
    DomainAvg(Domain),
    Efficiency(Domain),
    /// A task/metric column of the detailed table.
    TaskMetric { domain: Domain, task: String, metric: String },
}

impl SortKey {
    /// Whether header clicks on this column change the sort order.
    pub fn is_sortable(&self) -> bool {
        !matches!(self, SortKey::Size)
    }
}

/// Current sort column and direction, with the click-to-sort semantics of
/// the table headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: Direction,
}

impl SortState {
    /// New sort state with the default best-first bias.
    pub fn descending(key: SortKey) -> SortState {
        SortState { key, direction: Direction::Descending }
    }

    /// Header click: the same column toggles direction, a new column resets
    /// to descending. Clicks on non-sortable columns do nothing.
    pub fn click(&mut self, key: SortKey) {
        if !key.is_sortable() {
            return;
        }
        if self.key == key {
            self.direction = self.direction.flip();
        } else {
            self.key = key;
            self.direction = Direction::Descending;
        }
    }
}

/// Which average breaks year ties: the overall average in the summary table,
/// the selected domain's average in the detailed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    OverallAvg,
    DomainAvg(Domain),
}

impl TieBreak {
    fn value(&self, record: &Record) -> f64 {
        match self {
            TieBreak::OverallAvg => record.overall_avg(),
            TieBreak::DomainAvg(domain) => record.domain_avg(*domain),
        }
    }
}

/// Comparison value of a record under one sort key.
pub(crate) enum SortValue {
    Num(f64),
    Text(String),
}

pub(crate) fn sort_value(record: &Record, key: &SortKey) -> SortValue {
    match key {
        SortKey::Name => SortValue::Text(record.name.to_lowercase()),
        SortKey::Tags => SortValue::Text(record.tag_label().to_lowercase()),
        SortKey::Year => SortValue::Num(record.year.map(f64::from).unwrap_or(0.0)),
        SortKey::Size => SortValue::Num(0.0),
        SortKey::OverallAvg => SortValue::Num(record.overall_avg()),
        SortKey::DomainAvg(domain) => SortValue::Num(record.domain_avg(*domain)),
        SortKey::Efficiency(domain) => SortValue::Num(record.domain_efficiency(*domain)),
        SortKey::TaskMetric { domain, task, metric } => {
            SortValue::Num(record.task_score(*domain, task, metric).unwrap_or(0.0))
        }
    }
}

/// Sort records in place under the given state. `tie_break` applies only to
/// equal years and always orders descending, independent of the requested
/// direction.
pub fn sort_records(records: &mut [&Record], state: &SortState, tie_break: TieBreak) {
    records.sort_by(|a, b| compare(a, b, state, tie_break));
}

fn compare(a: &Record, b: &Record, state: &SortState, tie_break: TieBreak) -> Ordering {
    match (sort_value(a, &state.key), sort_value(b, &state.key)) {
        (SortValue::Text(va), SortValue::Text(vb)) => state.direction.apply(va.cmp(&vb)),
        (SortValue::Num(va), SortValue::Num(vb)) => {
            let ord = state.direction.apply(va.total_cmp(&vb));
            if ord == Ordering::Equal && state.key == SortKey::Year {
                tie_break.value(b).total_cmp(&tie_break.value(a))
            } else {
                ord
            }
        }
        // A key yields one value shape for every record.
        _ => Ordering::Equal,
    }
}
