//! Tests for the sort and rank engine.

use super::rank::rank_records;
use super::*;
use crate::schema::raw::RawRecord;
use crate::schema::Record;

fn record(json: &str) -> Record {
    let raw: RawRecord = serde_json::from_str(json).unwrap();
    Record::from_raw(raw, 0)
}

fn names<'a>(records: &[&'a Record]) -> Vec<&'a str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_numeric_sort_descending_and_ascending() {
    let a = record(r#"{"name": "a", "overall_avg": 50.0}"#);
    let b = record(r#"{"name": "b", "overall_avg": 70.0}"#);
    let c = record(r#"{"name": "c", "overall_avg": 60.0}"#);
    let mut view: Vec<&Record> = vec![&a, &b, &c];

    let mut state = SortState::descending(SortKey::OverallAvg);
    sort_records(&mut view, &state, TieBreak::OverallAvg);
    assert_eq!(names(&view), vec!["b", "c", "a"]);

    state.direction = Direction::Ascending;
    sort_records(&mut view, &state, TieBreak::OverallAvg);
    assert_eq!(names(&view), vec!["a", "c", "b"]);
}

#[test]
fn test_missing_scores_sort_as_zero() {
    let scored = record(r#"{"name": "scored", "math_avg": 12.0}"#);
    let sparse = record(r#"{"name": "sparse"}"#);
    let mut view: Vec<&Record> = vec![&sparse, &scored];

    let state = SortState::descending(SortKey::DomainAvg(crate::schema::Domain::Math));
    sort_records(&mut view, &state, TieBreak::OverallAvg);
    assert_eq!(names(&view), vec!["scored", "sparse"]);
}

#[test]
fn test_name_sort_is_case_insensitive() {
    let a = record(r#"{"name": "alpaca"}"#);
    let b = record(r#"{"name": "Beta"}"#);
    let c = record(r#"{"name": "CODE"}"#);
    let mut view: Vec<&Record> = vec![&c, &a, &b];

    let state = SortState { key: SortKey::Name, direction: Direction::Ascending };
    sort_records(&mut view, &state, TieBreak::OverallAvg);
    assert_eq!(names(&view), vec!["alpaca", "Beta", "CODE"]);
}

#[test]
fn test_year_ties_break_by_average_descending() {
    let low = record(r#"{"name": "low", "year": 2023, "overall_avg": 68.0}"#);
    let high = record(r#"{"name": "high", "year": 2023, "overall_avg": 72.0}"#);

    // The 72.0 record leads under BOTH requested directions.
    for direction in [Direction::Ascending, Direction::Descending] {
        let mut view: Vec<&Record> = vec![&low, &high];
        let state = SortState { key: SortKey::Year, direction };
        sort_records(&mut view, &state, TieBreak::OverallAvg);
        assert_eq!(names(&view), vec!["high", "low"], "direction {direction:?}");
    }
}

#[test]
fn test_distinct_years_follow_direction() {
    let old = record(r#"{"name": "old", "year": 2021, "overall_avg": 90.0}"#);
    let new = record(r#"{"name": "new", "year": 2024, "overall_avg": 10.0}"#);
    let mut view: Vec<&Record> = vec![&old, &new];

    let state = SortState { key: SortKey::Year, direction: Direction::Descending };
    sort_records(&mut view, &state, TieBreak::OverallAvg);
    assert_eq!(names(&view), vec!["new", "old"]);

    let state = SortState { key: SortKey::Year, direction: Direction::Ascending };
    sort_records(&mut view, &state, TieBreak::OverallAvg);
    assert_eq!(names(&view), vec!["old", "new"]);
}

#[test]
fn test_domain_tie_break_in_detailed_view() {
    let low = record(r#"{"name": "low", "year": 2022, "math_avg": 40.0, "overall_avg": 99.0}"#);
    let high = record(r#"{"name": "high", "year": 2022, "math_avg": 60.0, "overall_avg": 1.0}"#);
    let mut view: Vec<&Record> = vec![&low, &high];

    let state = SortState { key: SortKey::Year, direction: Direction::Descending };
    sort_records(&mut view, &state, TieBreak::DomainAvg(crate::schema::Domain::Math));
    assert_eq!(names(&view), vec!["high", "low"]);
}

#[test]
fn test_click_toggles_and_resets() {
    let mut state = SortState::descending(SortKey::OverallAvg);

    state.click(SortKey::OverallAvg);
    assert_eq!(state.direction, Direction::Ascending);

    state.click(SortKey::OverallAvg);
    assert_eq!(state.direction, Direction::Descending);

    state.click(SortKey::Name);
    assert_eq!(state.key, SortKey::Name);
    assert_eq!(state.direction, Direction::Descending);
}

#[test]
fn test_click_on_size_is_a_no_op() {
    let mut state = SortState { key: SortKey::Name, direction: Direction::Ascending };
    state.click(SortKey::Size);
    assert_eq!(state, SortState { key: SortKey::Name, direction: Direction::Ascending });
}

#[test]
fn test_rank_ties_carry_and_gap() {
    let a = record(r#"{"id": 1, "name": "a", "overall_avg": 70.04}"#);
    let b = record(r#"{"id": 2, "name": "b", "overall_avg": 70.02}"#);
    let c = record(r#"{"id": 3, "name": "c", "overall_avg": 65.0}"#);
    let view: Vec<&Record> = vec![&a, &b, &c];

    let ranks = rank_records(&view, &SortKey::OverallAvg);
    // 70.04 and 70.02 both round to 70.0: shared rank 1, then a gap to 3.
    assert_eq!(ranks[&1], 1);
    assert_eq!(ranks[&2], 1);
    assert_eq!(ranks[&3], 3);
}

#[test]
fn test_rank_rounding_precedes_comparison() {
    let a = record(r#"{"id": 1, "name": "a", "overall_avg": 80.04}"#);
    let b = record(r#"{"id": 2, "name": "b", "overall_avg": 80.06}"#);
    let c = record(r#"{"id": 3, "name": "c", "overall_avg": 79.9}"#);
    let view: Vec<&Record> = vec![&a, &b, &c];

    let ranks = rank_records(&view, &SortKey::OverallAvg);
    // Rounded scores 80.0, 80.1, 79.9: all distinct.
    assert_eq!(ranks[&2], 1);
    assert_eq!(ranks[&1], 2);
    assert_eq!(ranks[&3], 3);
}

#[test]
fn test_rank_excludes_baselines() {
    let instruct = record(r#"{"id": 1, "name": "instruct", "overall_avg": 99.0}"#);
    let base = record(r#"{"id": 2, "name": "base", "overall_avg": 98.0}"#);
    let normal = record(r#"{"id": 3, "name": "d", "overall_avg": 10.0}"#);
    let view: Vec<&Record> = vec![&instruct, &base, &normal];

    let ranks = rank_records(&view, &SortKey::OverallAvg);
    assert_eq!(ranks.len(), 1);
    assert_eq!(ranks[&3], 1);
}

#[test]
fn test_rank_independent_of_input_order() {
    let a = record(r#"{"id": 1, "name": "a", "overall_avg": 70.0}"#);
    let b = record(r#"{"id": 2, "name": "b", "overall_avg": 70.0}"#);
    let c = record(r#"{"id": 3, "name": "c", "overall_avg": 50.0}"#);
    let d = record(r#"{"id": 4, "name": "d", "overall_avg": 90.0}"#);

    let forward: Vec<&Record> = vec![&a, &b, &c, &d];
    let backward: Vec<&Record> = vec![&d, &c, &b, &a];
    assert_eq!(
        rank_records(&forward, &SortKey::OverallAvg),
        rank_records(&backward, &SortKey::OverallAvg)
    );
}

#[test]
fn test_rank_text_key_is_ascending_lexical() {
    let a = record(r#"{"id": 1, "name": "zeta"}"#);
    let b = record(r#"{"id": 2, "name": "Alpha"}"#);
    let c = record(r#"{"id": 3, "name": "midway"}"#);
    let view: Vec<&Record> = vec![&a, &b, &c];

    let ranks = rank_records(&view, &SortKey::Name);
    assert_eq!(ranks[&2], 1);
    assert_eq!(ranks[&3], 2);
    assert_eq!(ranks[&1], 3);
}

#[test]
fn test_rank_all_tied_shares_rank_one() {
    let a = record(r#"{"id": 1, "name": "a", "overall_avg": 33.31}"#);
    let b = record(r#"{"id": 2, "name": "b", "overall_avg": 33.29}"#);
    let view: Vec<&Record> = vec![&a, &b];

    let ranks = rank_records(&view, &SortKey::OverallAvg);
    assert_eq!(ranks[&1], 1);
    assert_eq!(ranks[&2], 1);
}
