//! Dense tie-aware ranking.
//!
//! Ranks are computed from the filtered population independent of the
//! current display order, so rank numbers do not move when the table is
//! re-sorted. Numeric scores are rounded to one decimal place BEFORE
//! comparison: records that differ only beyond one decimal tie.

use std::collections::HashMap;

use crate::schema::{Record, RecordId};
use crate::sort::{sort_value, SortKey, SortValue};

/// Comparison value after rounding. Tenths keeps rounded-equal scores
/// exactly equal without re-comparing floats.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum RankValue {
    Tenths(i64),
    Text(String),
}

fn rank_value(record: &Record, key: &SortKey) -> RankValue {
    match sort_value(record, key) {
        // NaN casts to 0, in line with the missing-score-is-zero policy.
        SortValue::Num(v) => RankValue::Tenths((v * 10.0).round() as i64),
        SortValue::Text(v) => RankValue::Text(v),
    }
}

/// Compute competition ranks ("1224": ties share a rank, the next distinct
/// value takes its 1-based position). Numeric keys rank best-first
/// (descending), text keys in ascending lexical order. Baseline records are
/// excluded entirely and never appear among the keys.
pub fn rank_records(records: &[&Record], key: &SortKey) -> HashMap<RecordId, usize> {
    let mut population: Vec<(RecordId, RankValue)> = records
        .iter()
        .filter(|r| !r.is_baseline())
        .map(|r| (r.id, rank_value(r, key)))
        .collect();

    population.sort_by(|(_, a), (_, b)| match (a, b) {
        (RankValue::Text(va), RankValue::Text(vb)) => va.cmp(vb),
        _ => b.cmp(a),
    });

    let mut ranks = HashMap::with_capacity(population.len());
    let mut previous: Option<(&RankValue, usize)> = None;
    for (position, (id, value)) in population.iter().enumerate() {
        let rank = match previous {
            Some((prev_value, prev_rank)) if prev_value == value => prev_rank,
            _ => position + 1,
        };
        ranks.insert(*id, rank);
        previous = Some((value, rank));
    }
    ranks
}
