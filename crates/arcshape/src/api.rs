//! Curated internal API (UNSTABLE).
//!
//! Convenience surface for the CLI and benches. Breaking changes are allowed.

pub use crate::angle::{parallelogram_area, point_on_circle, signed_vertex_angle};
pub use crate::arcs::{largest_available_arc, Arc, ArcPool, FIRST_REGION};
pub use crate::cfg::MIN_TARGET;
pub use crate::concavity::{resolve_center, snap_reflex, Concavity};
pub use crate::order::{chain_nearest, to_grid, GridCfg};
pub use crate::sampler::{neighbor_angles, pick_center};
pub use crate::triplets::{
    draw_generation, generate_triplets, generate_with, GenCfg, GenError, Generation, PointCount,
    ReplayToken, Spacing, Status, Triplet,
};
