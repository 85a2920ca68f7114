//! Triplet generation loop.
//!
//! Each step takes the widest available gap, samples a center and two
//! neighbor angles inside it, claims `[θ₁, θ₂]` and derives the triplet.
//! The run stops after `target` steps (`Status::Done`) or when no gap is
//! left (`Status::Exhausted`, a shorter but valid result).
//!
//! Code cross-refs: `arcs::ArcPool`, `sampler::{pick_center, neighbor_angles}`,
//! `concavity::resolve_center`.

mod types;

pub use types::{GenCfg, GenError, Generation, PointCount, ReplayToken, Spacing, Status, Triplet};

use crate::angle::point_on_circle;
use crate::arcs::{Arc, ArcPool};
use crate::cfg::MIN_TARGET;
use crate::concavity::resolve_center;
use crate::sampler::{neighbor_angles, pick_center};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Run the generator with an explicit RNG handle.
pub fn generate_with<R: Rng>(
    target: usize,
    cfg: &GenCfg,
    rng: &mut R,
) -> Result<Generation, GenError> {
    if target < MIN_TARGET {
        return Err(GenError::invalid(format!(
            "target count must be >= {MIN_TARGET}, got {target}"
        )));
    }
    cfg.validate()?;
    let spacing = Spacing::for_count(target, cfg.buffer_scale);
    let mut pool = ArcPool::new(spacing.buffer);
    let mut triplets = Vec::with_capacity(target);
    let mut status = Status::Done;

    for _ in 0..target {
        let Some(arc) = pool.largest_available() else {
            status = Status::Exhausted;
            tracing::info!(
                produced = triplets.len(),
                requested = target,
                "no arc left"
            );
            break;
        };
        let center = pick_center(rng, arc, cfg.center_spread);
        let (theta1, theta2) = neighbor_angles(rng, center, spacing.width, spacing.buffer, arc);
        pool.claim(Arc::new(theta1, theta2));

        let left = point_on_circle(theta1, cfg.radius);
        let right = point_on_circle(theta2, cfg.radius);
        let concavity = resolve_center(rng, center, left, right, cfg.radius);
        tracing::debug!(
            theta1,
            center,
            theta2,
            vertex_angle = concavity.vertex_angle,
            snapped = concavity.snapped,
            "claimed"
        );
        triplets.push(Triplet {
            left,
            center: concavity.point,
            right,
        });
    }

    Ok(Generation {
        triplets,
        arcs: pool.into_arcs(),
        status,
        spacing,
        requested: target,
    })
}

/// Generate up to `target` triplets on the unit circle.
///
/// `seed = None` draws the RNG from OS entropy.
pub fn generate_triplets(target: usize, seed: Option<u64>) -> Result<Vec<Triplet>, GenError> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    generate_with(target, &GenCfg::default(), &mut rng).map(|g| g.triplets)
}

/// Draw a point count and generate from a replay token.
///
/// The count and all sampling share the token's RNG, so `tok` alone
/// reproduces the whole `Generation`.
pub fn draw_generation(
    count: PointCount,
    cfg: &GenCfg,
    tok: ReplayToken,
) -> Result<Generation, GenError> {
    let mut rng = tok.to_std_rng();
    let n = count.sample(&mut rng);
    generate_with(n, cfg, &mut rng)
}

#[cfg(test)]
mod tests;
