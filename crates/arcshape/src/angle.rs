//! Angle helpers shared by the sampler and the concavity check.
//!
//! Conventions
//! - `θ ↦ (r sin θ, r cos θ)`: angles start at +y and run clockwise.
//! - Angles are plain reals. Nothing here wraps modulo 2π.

use nalgebra::Vector2;
use std::f64::consts::{PI, TAU};

/// Point at angle `theta` on the circle of radius `r` around the origin.
#[inline]
pub fn point_on_circle(theta: f64, r: f64) -> Vector2<f64> {
    Vector2::new(r * theta.sin(), r * theta.cos())
}

/// Signed area of the parallelogram spanned by `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Oriented angle at vertex `b` between the edges `b→a` and `b→c`, in `[0, 2π)`.
///
/// The unsigned angle is the arccos of the normalized dot product. When the
/// turn from `b→a` to `b→c` is counterclockwise (positive cross product) the
/// reflex complement `2π − angle` is returned instead.
///
/// A zero-length edge has no angle; it is reported as `π`.
pub fn signed_vertex_angle(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ba = a - b;
    let bc = c - b;
    let lengths = ba.norm() * bc.norm();
    if !(lengths.is_finite()) || lengths <= 0.0 {
        return PI;
    }
    let angle = (ba.dot(&bc) / lengths).clamp(-1.0, 1.0).acos();
    if parallelogram_area(ba, bc) > 0.0 {
        // acos(1) = 0 would map to 2π; keep the half-open range.
        let reflex = TAU - angle;
        if reflex >= TAU {
            0.0
        } else {
            reflex
        }
    } else {
        angle
    }
}
