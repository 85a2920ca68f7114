//! Interior "concavity" point of a triplet.
//!
//! The candidate sits on the center angle at a reduced radius
//! `r′ = r·U(0.1, 0.91)`. If the oriented vertex angle at the candidate,
//! between the edges to the left and right boundary points, is `≥ π`, the
//! candidate is replaced by the origin. There is no retry.

use crate::angle::{point_on_circle, signed_vertex_angle};
use crate::cfg::{RADIUS_FRAC_MAX, RADIUS_FRAC_MIN};
use crate::sampler::uniform;
use nalgebra::Vector2;
use rand::Rng;
use std::f64::consts::PI;

/// Resolved interior point plus the quantities that decided it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Concavity {
    /// Candidate, or the origin when `snapped`.
    pub point: Vector2<f64>,
    /// Oriented angle at the candidate, in `[0, 2π)`.
    pub vertex_angle: f64,
    /// Distance of the candidate from the origin.
    pub reduced_radius: f64,
    pub snapped: bool,
}

/// Apply the validity rule to a fixed candidate.
pub fn snap_reflex(
    candidate: Vector2<f64>,
    left: Vector2<f64>,
    right: Vector2<f64>,
) -> Concavity {
    let vertex_angle = signed_vertex_angle(left, candidate, right);
    let snapped = vertex_angle >= PI;
    Concavity {
        point: if snapped { Vector2::zeros() } else { candidate },
        vertex_angle,
        reduced_radius: candidate.norm(),
        snapped,
    }
}

/// Sample the reduced radius and resolve the interior point at angle `center`.
pub fn resolve_center<R: Rng>(
    rng: &mut R,
    center: f64,
    left: Vector2<f64>,
    right: Vector2<f64>,
    radius: f64,
) -> Concavity {
    let r_prime = radius * uniform(rng, RADIUS_FRAC_MIN, RADIUS_FRAC_MAX);
    snap_reflex(point_on_circle(center, r_prime), left, right)
}
