//! Center and neighbor angles inside a chosen gap.
//!
//! Conventions
//! - `uniform(rng, a, b)` is `a + (b − a)·u` with `u ∈ [0, 1)`. The bounds
//!   may arrive in either order or coincide; the draw never panics.
//! - `width` is the angular budget per point (`2π/n`), `buffer` the spacing
//!   heuristic (`2π/(2n)` by default). Callers keep `width ≥ 2·buffer`.

use crate::arcs::Arc;
use rand::Rng;

/// Uniform draw between `a` and `b` (either order).
#[inline]
pub fn uniform<R: Rng>(rng: &mut R, a: f64, b: f64) -> f64 {
    a + (b - a) * rng.gen::<f64>()
}

/// Central angle inside `arc`.
///
/// `spread ∈ [0, 1]` is the fraction of the arc the center may roam, kept
/// symmetric around the midpoint: 0 is the midpoint itself, 0.5 the middle half.
pub fn pick_center<R: Rng>(rng: &mut R, arc: Arc, spread: f64) -> f64 {
    let margin = arc.width() * (1.0 - spread.clamp(0.0, 1.0)) / 2.0;
    uniform(rng, arc.start + margin, arc.end - margin)
}

/// Two neighbor angles `(θ₁, θ₂)` around `center`, inside `bounding`.
///
/// - `θ₁` is drawn from `[center − width + buffer, center − buffer]`. If the
///   lower bound falls before `bounding.start`, from `[bounding.start, center]`.
/// - `θ₂` is drawn from `[center + buffer, center + width − buffer]`. If the
///   upper bound falls past `bounding.end`, from between `center + buffer`
///   and `bounding.end`.
///
/// With `center ∈ bounding` this gives `bounding.start ≤ θ₁ ≤ center < θ₂`
/// and `θ₂ ≤ max(bounding.end, center + buffer)`. Since `bounding` is a gap
/// already shrunk by `buffer`, `θ₂` never reaches the next claimed arc.
pub fn neighbor_angles<R: Rng>(
    rng: &mut R,
    center: f64,
    width: f64,
    buffer: f64,
    bounding: Arc,
) -> (f64, f64) {
    let low = center - width + buffer;
    let theta1 = if low < bounding.start {
        uniform(rng, bounding.start, center)
    } else {
        uniform(rng, center - buffer, low)
    };
    let high = center + width - buffer;
    let theta2 = if high > bounding.end {
        uniform(rng, center + buffer, bounding.end)
    } else {
        uniform(rng, center + buffer, high)
    };
    (theta1, theta2)
}
