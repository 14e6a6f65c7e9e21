//! Rendered row types produced by the view pipeline.

use serde::Serialize;

use crate::present::ScoreCell;
use crate::schema::{BaselineKind, Domain, RecordId};

/// A row of the summary table.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub id: RecordId,
    /// Competition rank; `None` for baseline records, rendered `"-"`.
    pub rank: Option<usize>,
    pub name: String,
    pub tags: Vec<String>,
    pub year: Option<u32>,
    /// Raw size label, empty if the record has none.
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<BaselineKind>,
    pub domains: Vec<DomainCell>,
    pub overall: ScoreCell,
}

/// One per-domain score column of a summary row.
#[derive(Debug, Clone, Serialize)]
pub struct DomainCell {
    pub domain: Domain,
    pub cell: ScoreCell,
}

/// A row of the detailed per-task table.
#[derive(Debug, Clone, Serialize)]
pub struct DetailRow {
    pub id: RecordId,
    pub rank: Option<usize>,
    pub name: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<BaselineKind>,
    /// The selected domain's average.
    pub average: ScoreCell,
    /// Formatted efficiency ratio, `"-"` when absent.
    pub efficiency: String,
    /// Task/metric cells, index-aligned with the table's headers.
    pub tasks: Vec<ScoreCell>,
}

/// One flattened task/metric column of the detailed table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskHeader {
    pub task_name: String,
    pub metric: String,
}

impl TaskHeader {
    /// Column label: task name, with the metric when it disambiguates.
    pub fn label(&self) -> String {
        format!("{} ({})", self.task_name, self.metric)
    }
}

/// `"-"` for a missing rank (baseline rows).
pub fn rank_label(rank: Option<usize>) -> String {
    rank.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string())
}

/// `"-"` for a missing year.
pub fn year_label(year: Option<u32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string())
}
