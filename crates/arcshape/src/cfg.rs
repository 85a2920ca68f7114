//! Numeric defaults for arc generation.
//!
//! Policy
//! - These are fixed constants, not runtime knobs. Tunable heuristics
//!   (buffer scale, center spread, radius) live on `GenCfg`.

/// Smallest accepted target count.
pub const MIN_TARGET: usize = 3;
/// Lower end of the reduced-radius band, as a fraction of the circle radius.
pub const RADIUS_FRAC_MIN: f64 = 0.1;
/// Upper end of the reduced-radius band, as a fraction of the circle radius.
pub const RADIUS_FRAC_MAX: f64 = 0.91;
/// Gaps narrower than `-GAP_EPS` after buffer shrinkage are unavailable.
/// Zero-width gaps still compete; rounding may put them a few ulps below zero.
pub const GAP_EPS: f64 = 1e-12;
