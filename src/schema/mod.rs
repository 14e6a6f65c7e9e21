//! Leaderboard data model.
//!
//! - `domain`: the declared domain set and typed field access
//! - `record`: normalized records, tasks, and baseline flags
//! - `improvement`: baseline-relative score deltas, normalized from both
//!   wire revisions
//! - `raw`: wire-format types accepted from the JSON file
//! - `size`: magnitude-string parsing for the size filter

mod domain;
pub mod improvement;
pub mod raw;
mod record;
mod size;


pub use domain::Domain;
pub use improvement::{BaselineDeltas, Improvement};
pub use record::{BaselineKind, Record, RecordId, Task, TaskMetric};
pub use size::parse_size;
