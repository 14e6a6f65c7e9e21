//! Normalized improvement (score delta) data.
//!
//! Both wire revisions resolve into one nested shape here, so delta lookups
//! never re-discriminate between the legacy flat map and the per-baseline
//! form at read time.

use std::collections::BTreeMap;

use crate::schema::raw::{RawDelta, RawDeltaMap, RawImprovement};
use crate::schema::{BaselineKind, Domain};

/// Deltas of a record's scores against one baseline record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaselineDeltas {
    /// Delta of the overall average.
    pub overall_avg: Option<f64>,
    /// Delta of each domain average.
    pub domain_avg: BTreeMap<Domain, f64>,
    /// Per-domain delta arrays, positionally aligned with the flattened
    /// task/metric column order of that domain. Misaligned input silently
    /// yields wrong deltas; alignment is not validated.
    pub task_scores: BTreeMap<Domain, Vec<f64>>,
}

impl BaselineDeltas {
    fn from_raw(raw: &RawDeltaMap) -> Self {
        let mut deltas = BaselineDeltas::default();
        for (key, value) in raw {
            match value {
                RawDelta::Scalar(v) => {
                    if key == "overall_avg" {
                        deltas.overall_avg = Some(*v);
                    } else if let Some(domain) = Domain::from_avg_key(key) {
                        deltas.domain_avg.insert(domain, *v);
                    }
                }
                RawDelta::Series(values) => {
                    if let Some(domain) = Domain::from_task_scores_key(key) {
                        deltas.task_scores.insert(domain, values.clone());
                    }
                }
            }
        }
        deltas
    }

    fn from_flat(raw: &BTreeMap<String, f64>) -> Self {
        let mut deltas = BaselineDeltas::default();
        for (key, value) in raw {
            if key == "overall_avg" {
                deltas.overall_avg = Some(*value);
            } else if let Some(domain) = Domain::from_avg_key(key) {
                deltas.domain_avg.insert(domain, *value);
            }
        }
        deltas
    }

    /// Delta for the overall-average column.
    pub fn for_overall(&self) -> Option<f64> {
        self.overall_avg
    }

    /// Delta for a domain-average column.
    pub fn for_domain(&self, domain: Domain) -> Option<f64> {
        self.domain_avg.get(&domain).copied()
    }

    /// Delta for the task/metric column at flattened position `index`.
    pub fn for_task(&self, domain: Domain, index: usize) -> Option<f64> {
        self.task_scores.get(&domain).and_then(|scores| scores.get(index)).copied()
    }
}

/// A record's improvement data, nested by baseline kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Improvement {
    vs_base: Option<BaselineDeltas>,
    vs_instruct: Option<BaselineDeltas>,
}

impl Improvement {
    /// Resolve either wire revision into the normalized shape.
    ///
    /// The legacy flat map predates baseline selection, so its deltas are
    /// served under both baseline kinds.
    pub fn from_raw(raw: &RawImprovement) -> Self {
        match raw {
            RawImprovement::Nested(nested) => Improvement {
                vs_base: nested.vs_base.as_ref().map(BaselineDeltas::from_raw),
                vs_instruct: nested.vs_instruct.as_ref().map(BaselineDeltas::from_raw),
            },
            RawImprovement::Flat(flat) => {
                let deltas = BaselineDeltas::from_flat(flat);
                Improvement { vs_base: Some(deltas.clone()), vs_instruct: Some(deltas) }
            }
        }
    }

    /// Deltas against the given baseline kind, if present.
    pub fn deltas(&self, kind: BaselineKind) -> Option<&BaselineDeltas> {
        match kind {
            BaselineKind::Base => self.vs_base.as_ref(),
            BaselineKind::Instruct => self.vs_instruct.as_ref(),
        }
    }
}
