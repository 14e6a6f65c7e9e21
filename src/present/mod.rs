//! Score presentation: fixed one-decimal score strings, signed baseline
//! deltas, and adaptive-precision efficiency ratios.


use serde::Serialize;

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Format a score with one fixed decimal. Non-finite input renders `"0.0"`,
/// matching the missing-score-is-zero policy.
pub fn format_score(score: f64) -> String {
    if !score.is_finite() {
        return "0.0".to_string();
    }
    let rounded = round1(score);
    if rounded == 0.0 {
        // Avoids "-0.0" from tiny negatives.
        "0.0".to_string()
    } else {
        format!("{rounded:.1}")
    }
}

/// Format an optional score; absent renders `"0.0"`.
pub fn format_score_opt(score: Option<f64>) -> String {
    format_score(score.unwrap_or(0.0))
}

/// Format an efficiency (score per unit cost) ratio. Precision adapts to the
/// magnitude (3 to 6 decimals) so very small ratios stay legible. Zero or
/// non-finite renders `"-"`.
pub fn format_efficiency(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "-".to_string();
    }
    let magnitude = value.abs();
    let decimals = if magnitude >= 0.1 {
        3
    } else if magnitude >= 0.01 {
        4
    } else if magnitude >= 0.001 {
        5
    } else {
        6
    };
    format!("{value:.decimals$}")
}

/// Visual class of a score badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreClass {
    High,
    Medium,
    Low,
}

impl ScoreClass {
    /// Badge thresholds: high at 70, medium at 50.
    pub fn from_score(score: f64) -> ScoreClass {
        if score >= 70.0 {
            ScoreClass::High
        } else if score >= 50.0 {
            ScoreClass::Medium
        } else {
            ScoreClass::Low
        }
    }
}

/// Visual class of a baseline delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaClass {
    Positive,
    Negative,
}

/// A formatted baseline delta.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeltaCell {
    pub text: String,
    pub class: DeltaClass,
}

/// Format a delta with an explicit sign and one decimal. A delta that rounds
/// to zero renders `"0.0"` and is classified positive: a deliberate design
/// decision, not a bug. Non-finite deltas produce no cell.
pub fn delta_cell(delta: f64) -> Option<DeltaCell> {
    if !delta.is_finite() {
        return None;
    }
    let rounded = round1(delta);
    let (text, class) = if rounded == 0.0 {
        ("0.0".to_string(), DeltaClass::Positive)
    } else if rounded > 0.0 {
        (format!("+{rounded:.1}"), DeltaClass::Positive)
    } else {
        (format!("{rounded:.1}"), DeltaClass::Negative)
    };
    Some(DeltaCell { text, class })
}

/// A fully formatted score cell: text, badge class, and the optional delta
/// against the selected baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCell {
    pub text: String,
    pub class: ScoreClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<DeltaCell>,
}

/// Build a score cell from a raw score and an optional baseline delta.
pub fn score_cell(score: f64, delta: Option<f64>) -> ScoreCell {
    let score = if score.is_finite() { score } else { 0.0 };
    ScoreCell {
        text: format_score(score),
        class: ScoreClass::from_score(score),
        delta: delta.and_then(delta_cell),
    }
}
