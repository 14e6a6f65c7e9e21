//! Tablero: leaderboard view-model for model evaluation scores
//!
//! Loads a precomputed JSON dataset of evaluation scores and derives
//! filtered, sorted, ranked, baseline-annotated row views for a summary
//! table and a detailed per-task table.
//!
//! ## Architecture
//!
//! - `schema`: records, domains, baselines, and improvement deltas
//! - `store`: dataset loading with a synthetic fallback on failure
//! - `filter`: search, tag, and size-range predicates with baseline pinning
//! - `sort`: multi-key ordering and dense tie-aware ranking
//! - `present`: score, delta, and efficiency formatting
//! - `view`: selection state and the derived row pipeline
//! - `cli`: terminal viewer exercising the pipeline end to end
//!
//! ## Example
//!
//! ```
//! use tablero::store::fallback_dataset;
//! use tablero::view::LeaderboardView;
//!
//! let mut view = LeaderboardView::new(fallback_dataset());
//! view.selection.filters.query = "dataset_1".to_string();
//!
//! for row in view.summary_rows() {
//!     println!("{} {} {}", tablero::view::rank_label(row.rank), row.name, row.overall.text);
//! }
//! ```

pub mod cli;
pub mod error;
pub mod filter;
pub mod present;
pub mod schema;
pub mod sort;
pub mod store;
pub mod view;

pub use error::{Error, Result};
pub use schema::{BaselineKind, Domain, Record, RecordId};
pub use store::Dataset;
pub use view::{LeaderboardView, Selection};
