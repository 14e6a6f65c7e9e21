//! Wire-format record types.
//!
//! The leaderboard JSON went through several schema revisions: early files
//! carry a single `domain` string and a flat `improvement` map, later files a
//! comma-separated `tag` string and `improvement` nested by baseline kind.
//! These types accept every revision as-is; `Record::from_raw` resolves them
//! into the one normalized in-memory shape.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One record as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub general_avg: Option<f64>,
    #[serde(default)]
    pub math_avg: Option<f64>,
    #[serde(default)]
    pub code_avg: Option<f64>,
    #[serde(default)]
    pub reasoning_avg: Option<f64>,
    #[serde(default)]
    pub overall_avg: Option<f64>,
    #[serde(default)]
    pub general_efficiency: Option<f64>,
    #[serde(default)]
    pub math_efficiency: Option<f64>,
    #[serde(default)]
    pub code_efficiency: Option<f64>,
    #[serde(default)]
    pub reasoning_efficiency: Option<f64>,
    /// `<domain>_tasks` -> ordered task list. Keys not in the declared
    /// domain set are dropped during normalization.
    #[serde(default)]
    pub task_details: BTreeMap<String, Vec<RawTask>>,
    #[serde(default)]
    pub improvement: Option<RawImprovement>,
}

/// One evaluated task with its metric scores. List order inside
/// `task_details` is the canonical column order.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTask {
    pub task_name: String,
    #[serde(default)]
    pub metrics: Vec<RawTaskMetric>,
}

/// A single metric score within a task.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTaskMetric {
    pub metric: String,
    #[serde(default)]
    pub score: Option<f64>,
}

/// The two improvement schema revisions.
///
/// Nested is tried first; `deny_unknown_fields` makes a legacy flat map
/// (`"general_avg": 1.2`) fall through to `Flat` instead of matching the
/// all-optional nested struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawImprovement {
    Nested(RawNestedImprovement),
    Flat(BTreeMap<String, f64>),
}

/// Improvement keyed by baseline kind (current schema revision).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawNestedImprovement {
    #[serde(default)]
    pub vs_base: Option<RawDeltaMap>,
    #[serde(default)]
    pub vs_instruct: Option<RawDeltaMap>,
}

/// Flat delta entries under one baseline kind: `<domain>_avg` scalars plus
/// `<domain>_task_scores` positional arrays.
pub type RawDeltaMap = BTreeMap<String, RawDelta>;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDelta {
    Scalar(f64),
    Series(Vec<f64>),
}
