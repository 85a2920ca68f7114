//! Arc partitioning on a circle and concavity triplets for procedural shapes.
//!
//! Pipeline
//! - `arcs`: claimed-arc bookkeeping and largest-gap selection.
//! - `sampler`: center and neighbor angles inside a chosen gap.
//! - `concavity`: interior point at a reduced radius, snapped to the origin when reflex.
//! - `triplets`: the generation loop (`generate_with`, `generate_triplets`, `draw_generation`).
//! - `order`: renderer-side helpers (grid transform, nearest-neighbor chaining).
//!
//! Randomness is always an explicit `Rng` handle passed by the caller.
//! Nothing reads process-wide random state.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - `api` is the curated surface for the CLI and benches.

pub mod angle;
pub mod api;
pub mod arcs;
pub mod cfg;
pub mod concavity;
pub mod order;
pub mod sampler;
pub mod triplets;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{point_on_circle, signed_vertex_angle};
    pub use crate::arcs::{largest_available_arc, Arc, ArcPool};
    pub use crate::order::{chain_nearest, to_grid, GridCfg};
    pub use crate::triplets::{
        draw_generation, generate_triplets, generate_with, GenCfg, GenError, Generation,
        PointCount, ReplayToken, Spacing, Status, Triplet,
    };
    pub use nalgebra::Vector2 as Vec2;
}
