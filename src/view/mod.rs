//! Leaderboard view-model.
//!
//! Owns the loaded dataset plus the user's selection state and derives the
//! rendered row views on demand. Every derivation is a pure function of
//! (dataset, selection) recomputed per call; there is no cached or
//! event-pushed state to invalidate.
//!
//! Pipeline per table: filter -> rank (from the unsorted filtered
//! population) -> sort -> pin baselines -> format cells.

mod row;
mod selection;


use crate::filter::{apply, pin_baselines};
use crate::present::{format_efficiency, score_cell, ScoreCell};
use crate::schema::{BaselineDeltas, Domain, Record};
use crate::sort::rank::rank_records;
use crate::sort::{sort_records, SortKey, SortState, TieBreak};
use crate::store::Dataset;

pub use row::{rank_label, year_label, DetailRow, DomainCell, SummaryRow, TaskHeader};
pub use selection::Selection;

/// The leaderboard view-model: one dataset, one selection, derived rows.
#[derive(Debug, Clone)]
pub struct LeaderboardView {
    dataset: Dataset,
    pub selection: Selection,
}

impl LeaderboardView {
    /// Create a view over a dataset, selecting the first family.
    pub fn new(dataset: Dataset) -> LeaderboardView {
        let family = dataset.family_ids().next().unwrap_or("").to_string();
        LeaderboardView { dataset, selection: Selection::new(family) }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Records of the selected family; empty when the family is unknown.
    pub fn records(&self) -> &[Record] {
        self.dataset.family(&self.selection.family)
    }

    /// Derive the summary table rows.
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        let records = self.records();
        let filtered = apply(records, &self.selection.filters);

        // Ranks come from the unsorted filtered population so they do not
        // move when the display order changes.
        let ranks = rank_records(&filtered, &self.selection.summary_sort.key);

        let mut sorted = filtered;
        sort_records(&mut sorted, &self.selection.summary_sort, TieBreak::OverallAvg);

        pin_baselines(records, sorted)
            .into_iter()
            .map(|record| {
                let deltas = self.deltas_for(record);
                SummaryRow {
                    id: record.id,
                    rank: ranks.get(&record.id).copied(),
                    name: record.name.clone(),
                    tags: record.tags.iter().cloned().collect(),
                    year: record.year,
                    size: record.size_label.clone(),
                    baseline: record.baseline,
                    domains: Domain::ALL
                        .into_iter()
                        .map(|domain| DomainCell {
                            domain,
                            cell: score_cell(
                                record.domain_avg(domain),
                                deltas.and_then(|d| d.for_domain(domain)),
                            ),
                        })
                        .collect(),
                    overall: score_cell(
                        record.overall_avg(),
                        deltas.and_then(BaselineDeltas::for_overall),
                    ),
                }
            })
            .collect()
    }

    /// Derive the detailed per-task rows. Empty until a task domain is
    /// selected.
    pub fn detail_rows(&self) -> Vec<DetailRow> {
        let Some(domain) = self.selection.task_domain else {
            return Vec::new();
        };
        let headers = self.task_headers(domain);
        let records = self.records();
        let filtered = apply(records, &self.selection.filters);

        let state = self.detail_sort_state(domain);
        let ranks = rank_records(&filtered, &state.key);

        let mut sorted = filtered;
        sort_records(&mut sorted, &state, TieBreak::DomainAvg(domain));

        pin_baselines(records, sorted)
            .into_iter()
            .map(|record| {
                let deltas = self.deltas_for(record);
                DetailRow {
                    id: record.id,
                    rank: ranks.get(&record.id).copied(),
                    name: record.name.clone(),
                    tags: record.tags.iter().cloned().collect(),
                    baseline: record.baseline,
                    average: score_cell(
                        record.domain_avg(domain),
                        deltas.and_then(|d| d.for_domain(domain)),
                    ),
                    efficiency: format_efficiency(record.domain_efficiency(domain)),
                    tasks: self.task_cells(record, domain, &headers, deltas),
                }
            })
            .collect()
    }

    fn task_cells(
        &self,
        record: &Record,
        domain: Domain,
        headers: &[TaskHeader],
        deltas: Option<&BaselineDeltas>,
    ) -> Vec<ScoreCell> {
        headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                let score = record
                    .task_score(domain, &header.task_name, &header.metric)
                    .unwrap_or(0.0);
                // Improvement arrays align with the flattened header order
                // by position.
                score_cell(score, deltas.and_then(|d| d.for_task(domain, index)))
            })
            .collect()
    }

    /// Flattened task/metric column headers for a domain, taken from the
    /// first record that carries task details for it. Multi-metric tasks
    /// contribute one column per metric; a task without metrics falls back
    /// to an `accuracy` column.
    pub fn task_headers(&self, domain: Domain) -> Vec<TaskHeader> {
        let Some(record) = self.records().iter().find(|r| !r.tasks_for(domain).is_empty())
        else {
            return Vec::new();
        };

        let mut headers = Vec::new();
        for task in record.tasks_for(domain) {
            if task.metrics.len() > 1 {
                for metric in &task.metrics {
                    headers.push(TaskHeader {
                        task_name: task.task_name.clone(),
                        metric: metric.metric.clone(),
                    });
                }
            } else {
                headers.push(TaskHeader {
                    task_name: task.task_name.clone(),
                    metric: task
                        .metrics
                        .first()
                        .map(|m| m.metric.clone())
                        .unwrap_or_else(|| "accuracy".to_string()),
                });
            }
        }
        headers
    }

    /// Distinct tags across the family's non-baseline records, sorted.
    pub fn available_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .records()
            .iter()
            .filter(|r| !r.is_baseline())
            .flat_map(|r| r.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    /// Available tags with the declared domains first, in canonical order,
    /// followed by the rest.
    pub fn ordered_tags(&self) -> Vec<String> {
        let available = self.available_tags();
        let mut ordered: Vec<String> = Domain::ALL
            .into_iter()
            .map(|d| d.as_str().to_string())
            .filter(|d| available.contains(d))
            .collect();
        ordered.extend(available.into_iter().filter(|t| Domain::from_tag(t).is_none()));
        ordered
    }

    fn detail_sort_state(&self, domain: Domain) -> SortState {
        self.selection
            .detail_sort
            .clone()
            .unwrap_or_else(|| SortState::descending(SortKey::DomainAvg(domain)))
    }

    fn deltas_for<'a>(&self, record: &'a Record) -> Option<&'a BaselineDeltas> {
        let kind = self.selection.baseline?;
        record.improvement.as_ref()?.deltas(kind)
    }
}
