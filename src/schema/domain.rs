//! The declared domain set and typed field access.
//!
//! Wire records key their per-domain fields by string (`general_avg`,
//! `math_tasks`, ...). Those keys are resolved against this closed enum once
//! at load time; everything downstream works with `Domain` values instead of
//! rebuilding field names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Evaluation domain of a score column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    General,
    Math,
    Code,
    Reasoning,
}

impl Domain {
    /// All declared domains, in canonical display order.
    pub const ALL: [Domain; 4] = [Domain::General, Domain::Math, Domain::Code, Domain::Reasoning];

    /// Lowercase tag form of the domain.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::General => "general",
            Domain::Math => "math",
            Domain::Code => "code",
            Domain::Reasoning => "reasoning",
        }
    }

    /// Capitalized display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Domain::General => "General",
            Domain::Math => "Math",
            Domain::Code => "Code",
            Domain::Reasoning => "Reasoning",
        }
    }

    /// Resolve a bare domain tag (`"math"`), ignoring ASCII case.
    pub fn from_tag(tag: &str) -> Option<Domain> {
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(tag.trim()))
    }

    /// Resolve a `<domain>_avg` wire key.
    pub fn from_avg_key(key: &str) -> Option<Domain> {
        key.strip_suffix("_avg").and_then(Domain::from_tag)
    }

    /// Resolve a `<domain>_tasks` wire key.
    pub fn from_tasks_key(key: &str) -> Option<Domain> {
        key.strip_suffix("_tasks").and_then(Domain::from_tag)
    }

    /// Resolve a `<domain>_task_scores` wire key.
    pub fn from_task_scores_key(key: &str) -> Option<Domain> {
        key.strip_suffix("_task_scores").and_then(Domain::from_tag)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Domain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::from_tag(s).ok_or_else(|| Error::UnknownDomain(s.to_string()))
    }
}
