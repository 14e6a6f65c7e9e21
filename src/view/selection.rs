//! User selection state.
//!
//! Plain mutable state read by the pure derivation functions in the view.
//! Nothing here persists; a fresh `Selection` is the reset-to-defaults
//! behavior of a page reload.

use crate::filter::Filters;
use crate::schema::{BaselineKind, Domain};
use crate::sort::{SortKey, SortState};

/// Everything the user has chosen: family, filters, sort orders, the
/// detailed-view domain, and the baseline used for deltas.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Active model family id.
    pub family: String,
    pub filters: Filters,
    /// Domain of the detailed per-task table; `None` shows no detail rows.
    pub task_domain: Option<Domain>,
    /// Baseline anchoring the score deltas; `None` shows plain scores.
    pub baseline: Option<BaselineKind>,
    pub summary_sort: SortState,
    /// Detailed-table sort; `None` means the default order (selected
    /// domain's average, descending).
    pub detail_sort: Option<SortState>,
}

impl Selection {
    pub fn new(family: impl Into<String>) -> Selection {
        Selection {
            family: family.into(),
            filters: Filters::default(),
            task_domain: None,
            baseline: None,
            summary_sort: SortState::descending(SortKey::OverallAvg),
            detail_sort: None,
        }
    }

    /// Header click in the summary table.
    pub fn click_summary(&mut self, key: SortKey) {
        self.summary_sort.click(key);
    }

    /// Header click in the detailed table. The first click on a sortable
    /// column replaces the default order.
    pub fn click_detail(&mut self, key: SortKey) {
        if !key.is_sortable() {
            return;
        }
        match &mut self.detail_sort {
            Some(state) => state.click(key),
            None => self.detail_sort = Some(SortState::descending(key)),
        }
    }

    /// Clear search, tag, and size filters and the detailed-view domain.
    pub fn reset_filters(&mut self) {
        self.filters = Filters::default();
        self.task_domain = None;
    }
}
