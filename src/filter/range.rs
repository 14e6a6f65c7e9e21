//! Discrete size-range selection.

use serde::{Deserialize, Serialize};

/// Slider stops of the size filter. The final stop is unbounded.
pub const SIZE_STOPS: [f64; 8] =
    [0.0, 1e3, 1e4, 5e4, 1e5, 5e5, 1e6, f64::INFINITY];

/// Display labels for the slider stops, index-aligned with [`SIZE_STOPS`].
pub const SIZE_STOP_LABELS: [&str; 8] = ["0", "1K", "10K", "50K", "100K", "500K", "1M", "∞"];

/// A two-handle selection over the size slider, stored as stop indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    lo: usize,
    hi: usize,
}

impl SizeRange {
    /// Range spanning the whole slider (no filtering).
    pub fn full() -> SizeRange {
        SizeRange { lo: 0, hi: SIZE_STOPS.len() - 1 }
    }

    /// Range between two stop indices; indices are clamped to the slider and
    /// swapped if reversed.
    pub fn new(lo: usize, hi: usize) -> SizeRange {
        let last = SIZE_STOPS.len() - 1;
        let lo = lo.min(last);
        let hi = hi.min(last);
        if lo <= hi {
            SizeRange { lo, hi }
        } else {
            SizeRange { lo: hi, hi: lo }
        }
    }

    /// Whether the range spans the whole slider, i.e. filters nothing.
    pub fn is_full(&self) -> bool {
        self.lo == 0 && self.hi == SIZE_STOPS.len() - 1
    }

    /// Lower bound in samples.
    pub fn lower(&self) -> f64 {
        SIZE_STOPS[self.lo]
    }

    /// Upper bound in samples; infinite when the upper handle sits on the
    /// last stop.
    pub fn upper(&self) -> f64 {
        SIZE_STOPS[self.hi]
    }

    /// Whether a parsed size falls within the selected range.
    pub fn contains(&self, size: f64) -> bool {
        size >= self.lower() && size <= self.upper()
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        SizeRange::full()
    }
}
