//! Tests for the filter engine.

use std::collections::BTreeSet;

use super::*;
use crate::schema::raw::RawRecord;
use crate::schema::Record;

fn record(json: &str) -> Record {
    let raw: RawRecord = serde_json::from_str(json).unwrap();
    Record::from_raw(raw, 0)
}

fn sample() -> Vec<Record> {
    [
        r#"{"id": 1, "name": "instruct"}"#,
        r#"{"id": 2, "name": "base"}"#,
        r#"{"id": 3, "name": "Alpaca_52K", "tag": "general", "size": "52K"}"#,
        r#"{"id": 4, "name": "MetaMathQA", "tag": "math", "size": "395K"}"#,
        r#"{"id": 5, "name": "CodeAlpaca", "tag": "math,code", "size": "20K"}"#,
        r#"{"id": 6, "name": "TinySeed", "tag": "general", "size": "500"}"#,
    ]
    .iter()
    .map(|j| record(j))
    .collect()
}

fn tags(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn ids(records: &[&Record]) -> Vec<u64> {
    records.iter().map(|r| r.id).collect()
}

#[test]
fn test_no_filters_keeps_all_non_baselines() {
    let records = sample();
    let filtered = apply(&records, &Filters::default());
    assert_eq!(ids(&filtered), vec![3, 4, 5, 6]);
}

#[test]
fn test_query_is_case_insensitive_substring() {
    let records = sample();
    let filters = Filters { query: "alpaca".into(), ..Filters::default() };
    assert_eq!(ids(&apply(&records, &filters)), vec![3, 5]);
}

#[test]
fn test_query_never_matches_baselines() {
    let records = sample();
    let filters = Filters { query: "base".into(), ..Filters::default() };
    assert!(apply(&records, &filters).is_empty());
}

#[test]
fn test_include_mode_intersects() {
    let records = sample();
    let filters = Filters { tags: tags(&["math", "code"]), ..Filters::default() };
    // Any selected tag present keeps the record.
    assert_eq!(ids(&apply(&records, &filters)), vec![4, 5]);
}

#[test]
fn test_exclusive_mode_requires_exact_tag_set() {
    let records = sample();

    let exactly_math = Filters {
        tags: tags(&["math"]),
        tag_mode: TagMode::Exclusive,
        ..Filters::default()
    };
    assert_eq!(ids(&apply(&records, &exactly_math)), vec![4]);

    let math_and_code = Filters {
        tags: tags(&["math", "code"]),
        tag_mode: TagMode::Exclusive,
        ..Filters::default()
    };
    assert_eq!(ids(&apply(&records, &math_and_code)), vec![5]);
}

#[test]
fn test_include_mode_accepts_superset_and_exact() {
    let records = sample();
    // The {math}-tagged record passes under both selections in include mode.
    for selection in [tags(&["math"]), tags(&["math", "code"])] {
        let filters = Filters { tags: selection, ..Filters::default() };
        assert!(ids(&apply(&records, &filters)).contains(&4));
    }
}

#[test]
fn test_empty_tag_selection_filters_nothing() {
    let records = sample();
    let filters = Filters { tag_mode: TagMode::Exclusive, ..Filters::default() };
    assert_eq!(apply(&records, &filters).len(), 4);
}

#[test]
fn test_size_range_excludes_small_records() {
    let records = sample();
    // [10K, ∞): the 500-sample record drops out.
    let filters = Filters { size_range: SizeRange::new(2, 7), ..Filters::default() };
    assert_eq!(ids(&apply(&records, &filters)), vec![3, 4, 5]);
}

#[test]
fn test_full_size_range_is_inactive() {
    let records = sample();
    let filters = Filters { size_range: SizeRange::full(), ..Filters::default() };
    assert_eq!(apply(&records, &filters).len(), 4);
}

#[test]
fn test_bounded_range_uses_upper_stop() {
    let records = sample();
    // [10K, 100K]: keeps 52K and 20K, drops 395K and 500.
    let filters = Filters { size_range: SizeRange::new(2, 4), ..Filters::default() };
    assert_eq!(ids(&apply(&records, &filters)), vec![3, 5]);
}

#[test]
fn test_filter_preserves_input_order() {
    let mut records = sample();
    records.reverse();
    let filtered = apply(&records, &Filters::default());
    assert_eq!(ids(&filtered), vec![6, 5, 4, 3]);
}

#[test]
fn test_filter_is_idempotent() {
    let records = sample();
    let filters = Filters {
        query: "a".into(),
        tags: tags(&["math", "general"]),
        size_range: SizeRange::new(1, 7),
        ..Filters::default()
    };

    let once: Vec<Record> = apply(&records, &filters).into_iter().cloned().collect();
    let twice: Vec<Record> = apply(&once, &filters).into_iter().cloned().collect();
    assert_eq!(once, twice);
}

#[test]
fn test_pin_baselines_prepends_instruct_then_base() {
    let records = sample();
    let filtered = apply(&records, &Filters::default());
    let pinned = pin_baselines(&records, filtered);
    assert_eq!(ids(&pinned), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_baselines_pinned_even_when_filter_matches_nothing() {
    let records = sample();
    let filters = Filters { query: "no-such-dataset".into(), ..Filters::default() };
    let pinned = pin_baselines(&records, apply(&records, &filters));
    assert_eq!(ids(&pinned), vec![1, 2]);
}

#[test]
fn test_size_range_normalizes_handles() {
    assert_eq!(SizeRange::new(5, 2), SizeRange::new(2, 5));
    assert!(SizeRange::new(0, 99).is_full());
}
