//! Claimed arcs and largest-gap selection.
//!
//! Model
//! - A claimed `Arc` is the interval between the two neighbor angles of a
//!   triplet. Arcs are never stored wrapped around 0.
//! - Gaps between claimed arcs are shrunk by `buffer` on both ends before
//!   they compete. The shrunk gap is what the sampler works inside, so the
//!   buffer is baked in at claim time and never re-validated.
//! - The trailing gap runs from the last claimed end to `2π`. It is not
//!   merged with the leading gap that starts at 0.

use crate::cfg::GAP_EPS;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::iter;

/// Angular interval `[start, end]`.
///
/// Claimed arcs satisfy `start < end`. Candidate gaps returned by
/// `largest_available_arc` may be degenerate (width within `GAP_EPS` of 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub start: f64,
    pub end: f64,
}

impl Arc {
    #[inline]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
    #[inline]
    pub fn contains(&self, theta: f64) -> bool {
        self.start <= theta && theta <= self.end
    }
}

/// Region offered while nothing is claimed: the half circle `[π/2, 3π/2]`.
pub const FIRST_REGION: Arc = Arc {
    start: FRAC_PI_2,
    end: FRAC_PI_2 + PI,
};

/// Widest gap left by `claimed` (sorted by start), shrunk by `buffer` on both sides.
///
/// - Empty `claimed` yields `FIRST_REGION`.
/// - Candidates are the gaps `[0, a₀.start]`, `[aᵢ.end, aᵢ₊₁.start]` and
///   `[aₙ.end, 2π]`, in that order. On equal widths the later one wins.
/// - `None` once every candidate is narrower than `-GAP_EPS`.
pub fn largest_available_arc(claimed: &[Arc], buffer: f64) -> Option<Arc> {
    if claimed.is_empty() {
        return Some(FIRST_REGION);
    }
    let lows = iter::once(0.0).chain(claimed.iter().map(|a| a.end));
    let highs = claimed.iter().map(|a| a.start).chain(iter::once(TAU));
    let mut best = None;
    let mut widest = -GAP_EPS;
    for (lo, hi) in lows.zip(highs) {
        let gap = Arc::new(lo + buffer, hi - buffer);
        if gap.width() >= widest {
            widest = gap.width();
            best = Some(gap);
        }
    }
    best
}

/// Claimed arcs of one generation run, kept sorted by start.
#[derive(Clone, Debug, Default)]
pub struct ArcPool {
    arcs: Vec<Arc>,
    buffer: f64,
}

impl ArcPool {
    pub fn new(buffer: f64) -> Self {
        Self {
            arcs: Vec::new(),
            buffer,
        }
    }

    #[inline]
    pub fn buffer(&self) -> f64 {
        self.buffer
    }

    #[inline]
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// See `largest_available_arc`.
    pub fn largest_available(&self) -> Option<Arc> {
        largest_available_arc(&self.arcs, self.buffer)
    }

    /// Insert `arc`, keeping `(start, end)` ascending.
    pub fn claim(&mut self, arc: Arc) {
        let k = self
            .arcs
            .partition_point(|a| a.start < arc.start || (a.start == arc.start && a.end <= arc.end));
        self.arcs.insert(k, arc);
    }

    pub fn into_arcs(self) -> Vec<Arc> {
        self.arcs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Arc, start: f64, end: f64) -> bool {
        (a.start - start).abs() < 1e-12 && (a.end - end).abs() < 1e-12
    }

    #[test]
    fn empty_pool_offers_half_circle() {
        let gap = largest_available_arc(&[], 0.3).unwrap();
        assert_eq!(gap, FIRST_REGION);
        assert!((gap.width() - PI).abs() < 1e-12);
        assert_eq!(ArcPool::new(0.3).largest_available(), Some(FIRST_REGION));
    }

    #[test]
    fn picks_widest_shrunk_gap() {
        let claimed = [Arc::new(1.0, 2.0), Arc::new(4.0, 4.5)];
        let gap = largest_available_arc(&claimed, 0.25).unwrap();
        // Candidates: [0.25, 0.75], [2.25, 3.75], [4.75, 2π − 0.25].
        assert!(close(gap, 2.25, 3.75), "{gap:?}");
    }

    #[test]
    fn equal_widths_prefer_later_gap() {
        let claimed = [Arc::new(1.0, 2.0), Arc::new(3.0, 4.0), Arc::new(5.0, 6.0)];
        let gap = largest_available_arc(&claimed, 0.25).unwrap();
        assert!(close(gap, 4.25, 4.75), "{gap:?}");
    }

    #[test]
    fn trailing_gap_is_not_merged_with_leading_gap() {
        // Merged, [5.8, 2π] ∪ [0, 0.5] would dominate; separately the leading gap wins.
        let claimed = [Arc::new(0.5, 5.8)];
        let gap = largest_available_arc(&claimed, 0.1).unwrap();
        assert!(close(gap, 0.1, 0.4), "{gap:?}");
    }

    #[test]
    fn trailing_gap_competes_last() {
        let claimed = [Arc::new(0.5, 1.0)];
        let gap = largest_available_arc(&claimed, 0.1).unwrap();
        assert!(close(gap, 1.1, TAU - 0.1), "{gap:?}");
    }

    #[test]
    fn zero_width_gap_is_still_available() {
        let claimed = [Arc::new(0.5, 3.0), Arc::new(3.5, 6.0)];
        let gap = largest_available_arc(&claimed, 0.25).unwrap();
        assert!(gap.width().abs() < 1e-12, "{gap:?}");
        assert!(close(gap, 3.25, 3.25));
    }

    #[test]
    fn saturated_circle_is_exhausted() {
        let claimed = [Arc::new(0.05, 3.0), Arc::new(3.1, 6.2)];
        assert_eq!(largest_available_arc(&claimed, 0.1), None);
    }

    #[test]
    fn claim_keeps_start_order() {
        let mut pool = ArcPool::new(0.1);
        pool.claim(Arc::new(3.0, 3.5));
        pool.claim(Arc::new(1.0, 1.5));
        pool.claim(Arc::new(5.0, 5.2));
        pool.claim(Arc::new(1.0, 1.2));
        let starts: Vec<(f64, f64)> = pool.arcs().iter().map(|a| (a.start, a.end)).collect();
        assert_eq!(
            starts,
            vec![(1.0, 1.2), (1.0, 1.5), (3.0, 3.5), (5.0, 5.2)]
        );
        assert_eq!(pool.len(), 4);
        assert!(!pool.is_empty());
    }

    #[test]
    fn contains_is_closed() {
        let a = Arc::new(1.0, 2.0);
        assert!(a.contains(1.0) && a.contains(2.0) && a.contains(1.5));
        assert!(!a.contains(0.999) && !a.contains(2.001));
    }
}
