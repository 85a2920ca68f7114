//! Renderer-side helpers: image-grid transform and draw-order chaining.
//!
//! Triplets come out of the generator in generation order and unit-circle
//! coordinates. Renderers usually want image coordinates (y pointing down)
//! and an order in which consecutive triplets are close to each other.

use crate::triplets::Triplet;
use nalgebra::Vector2;

/// Affine map from circle space to image-grid space: `(x·s + o, −y·s + o)`.
#[derive(Clone, Copy, Debug)]
pub struct GridCfg {
    pub scale: f64,
    pub offset: f64,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            scale: 200.0,
            offset: 256.0,
        }
    }
}

#[inline]
fn grid_point(p: Vector2<f64>, g: GridCfg) -> Vector2<f64> {
    Vector2::new(p.x * g.scale + g.offset, -p.y * g.scale + g.offset)
}

/// Map all three points of `t` into grid space.
pub fn to_grid(t: &Triplet, g: GridCfg) -> Triplet {
    Triplet {
        left: grid_point(t.left, g),
        center: grid_point(t.center, g),
        right: grid_point(t.right, g),
    }
}

/// Greedy nearest-neighbor chain.
///
/// Starts at `triplets[0]`, then repeatedly appends the remaining triplet
/// whose `left` point is closest to the `right` point of the last appended
/// one. Ties go to the earliest remaining triplet.
pub fn chain_nearest(triplets: &[Triplet]) -> Vec<Triplet> {
    let mut out = Vec::with_capacity(triplets.len());
    if triplets.is_empty() {
        return out;
    }
    let mut remaining: Vec<usize> = (1..triplets.len()).collect();
    let mut last = triplets[0];
    out.push(last);
    while !remaining.is_empty() {
        let mut best = 0;
        let mut best_d = f64::INFINITY;
        for (k, &i) in remaining.iter().enumerate() {
            let d = (triplets[i].left - last.right).norm();
            if d < best_d {
                best = k;
                best_d = d;
            }
        }
        last = triplets[remaining.remove(best)];
        out.push(last);
    }
    out
}
