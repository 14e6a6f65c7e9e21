//! Normalized leaderboard records.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::schema::improvement::Improvement;
use crate::schema::raw::RawRecord;
use crate::schema::size::parse_size;
use crate::schema::Domain;

/// Stable record identifier, unique within a loaded dataset.
pub type RecordId = u64;

/// The two baseline kinds a record can be flagged as.
///
/// Baseline records anchor the improvement deltas; they are excluded from
/// ranking and filtering pools and pinned first in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselineKind {
    Base,
    Instruct,
}

impl BaselineKind {
    /// Reserved sentinel value marking a record as this baseline.
    pub fn sentinel(&self) -> &'static str {
        match self {
            BaselineKind::Base => "base",
            BaselineKind::Instruct => "instruct",
        }
    }

    fn from_sentinel(value: &str) -> Option<BaselineKind> {
        let v = value.trim();
        if v.eq_ignore_ascii_case("base") {
            Some(BaselineKind::Base)
        } else if v.eq_ignore_ascii_case("instruct") {
            Some(BaselineKind::Instruct)
        } else {
            None
        }
    }
}

impl fmt::Display for BaselineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sentinel())
    }
}

impl FromStr for BaselineKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BaselineKind::from_sentinel(s).ok_or_else(|| Error::UnknownBaseline(s.to_string()))
    }
}

/// A single metric score within a task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskMetric {
    pub metric: String,
    pub score: f64,
}

/// One evaluated task. The order of tasks within a domain defines the
/// canonical column order of the detailed table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub task_name: String,
    pub metrics: Vec<TaskMetric>,
}

/// One leaderboard row: an evaluated model/dataset variant.
///
/// Built from [`RawRecord`] once at load time; immutable afterwards. All
/// score accessors default to 0 for missing data.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    /// Tag tokens parsed from the comma-separated tag string (or the single
    /// legacy `domain` value). Empty for baseline records.
    pub tags: BTreeSet<String>,
    /// Raw size label for display (`"10K"`), empty if absent.
    pub size_label: String,
    /// Parsed numeric size; 0 for empty or malformed labels.
    pub size_count: f64,
    pub year: Option<u32>,
    /// Which baseline this record is, if any.
    pub baseline: Option<BaselineKind>,
    overall_avg: f64,
    domain_avg: BTreeMap<Domain, f64>,
    domain_efficiency: BTreeMap<Domain, f64>,
    tasks: BTreeMap<Domain, Vec<Task>>,
    pub improvement: Option<Improvement>,
}

impl Record {
    /// Normalize a wire record. `fallback_id` is used when the wire record
    /// carries no id of its own.
    pub fn from_raw(raw: RawRecord, fallback_id: RecordId) -> Record {
        let baseline = raw
            .name
            .trim()
            .parse::<BaselineKind>()
            .ok()
            .or_else(|| raw.domain.as_deref().and_then(|d| d.parse().ok()));

        let tags = if baseline.is_some() {
            BTreeSet::new()
        } else {
            let tag_source = raw.tag.as_deref().or(raw.domain.as_deref()).unwrap_or("");
            tag_source
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        };

        let size_label = raw.size.clone().unwrap_or_default();
        let size_count = parse_size(&size_label);

        let mut domain_avg = BTreeMap::new();
        let mut domain_efficiency = BTreeMap::new();
        for (domain, avg, efficiency) in [
            (Domain::General, raw.general_avg, raw.general_efficiency),
            (Domain::Math, raw.math_avg, raw.math_efficiency),
            (Domain::Code, raw.code_avg, raw.code_efficiency),
            (Domain::Reasoning, raw.reasoning_avg, raw.reasoning_efficiency),
        ] {
            domain_avg.insert(domain, avg.unwrap_or(0.0));
            domain_efficiency.insert(domain, efficiency.unwrap_or(0.0));
        }

        // Keys outside the declared domain set are dropped here.
        let mut tasks: BTreeMap<Domain, Vec<Task>> = BTreeMap::new();
        for (key, raw_tasks) in raw.task_details {
            let Some(domain) = Domain::from_tasks_key(&key) else {
                continue;
            };
            let normalized = raw_tasks
                .into_iter()
                .map(|t| Task {
                    task_name: t.task_name,
                    metrics: t
                        .metrics
                        .into_iter()
                        .map(|m| TaskMetric { metric: m.metric, score: m.score.unwrap_or(0.0) })
                        .collect(),
                })
                .collect();
            tasks.insert(domain, normalized);
        }

        Record {
            id: raw.id.unwrap_or(fallback_id),
            name: raw.name,
            tags,
            size_label,
            size_count,
            year: raw.year,
            baseline,
            overall_avg: raw.overall_avg.unwrap_or(0.0),
            domain_avg,
            domain_efficiency,
            tasks,
            improvement: raw.improvement.as_ref().map(Improvement::from_raw),
        }
    }

    /// Whether this record is a base or instruct baseline.
    pub fn is_baseline(&self) -> bool {
        self.baseline.is_some()
    }

    /// Overall average score (0 if absent in the input).
    pub fn overall_avg(&self) -> f64 {
        self.overall_avg
    }

    /// Average score for one domain (0 if absent in the input).
    pub fn domain_avg(&self, domain: Domain) -> f64 {
        self.domain_avg.get(&domain).copied().unwrap_or(0.0)
    }

    /// Efficiency (score per unit cost) for one domain; 0 if absent.
    pub fn domain_efficiency(&self, domain: Domain) -> f64 {
        self.domain_efficiency.get(&domain).copied().unwrap_or(0.0)
    }

    /// Ordered task list for one domain; empty if the record has none.
    pub fn tasks_for(&self, domain: Domain) -> &[Task] {
        self.tasks.get(&domain).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Score of one task/metric, if present.
    pub fn task_score(&self, domain: Domain, task_name: &str, metric: &str) -> Option<f64> {
        self.tasks_for(domain)
            .iter()
            .find(|t| t.task_name == task_name)?
            .metrics
            .iter()
            .find(|m| m.metric == metric)
            .map(|m| m.score)
    }

    /// Tag tokens joined for display.
    pub fn tag_label(&self) -> String {
        self.tags.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}
