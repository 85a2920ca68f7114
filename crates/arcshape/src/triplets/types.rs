//! Data types for the triplet generator: config, results, errors, replay.

use crate::arcs::Arc;
use crate::cfg::MIN_TARGET;
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use std::fmt;

/// One local shape feature: two boundary points on the circle and the
/// interior concavity point between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triplet {
    pub left: Vector2<f64>,
    pub center: Vector2<f64>,
    pub right: Vector2<f64>,
}

impl Triplet {
    #[inline]
    pub fn points(&self) -> [Vector2<f64>; 3] {
        [self.left, self.center, self.right]
    }
    /// Center was snapped to the origin.
    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.center == Vector2::zeros()
    }
}

/// Generator configuration.
#[derive(Clone, Copy, Debug)]
pub struct GenCfg {
    /// Circle radius. Boundary points lie exactly on it.
    pub radius: f64,
    /// Fraction of the chosen gap the center angle may roam, in `[0, 1]`.
    /// 0 pins it to the gap midpoint.
    pub center_spread: f64,
    /// Multiplier on the default buffer `2π/(2n)`, in `(0, 1]`.
    pub buffer_scale: f64,
}

impl Default for GenCfg {
    fn default() -> Self {
        Self {
            radius: 1.0,
            center_spread: 0.0,
            buffer_scale: 1.0,
        }
    }
}

impl GenCfg {
    pub(crate) fn validate(&self) -> Result<(), GenError> {
        if !(self.radius.is_finite()) || self.radius <= 0.0 {
            return Err(GenError::invalid("radius must be finite and > 0"));
        }
        if !(0.0..=1.0).contains(&self.center_spread) {
            return Err(GenError::invalid("center_spread must lie in [0, 1]"));
        }
        if !(self.buffer_scale > 0.0 && self.buffer_scale <= 1.0) {
            return Err(GenError::invalid("buffer_scale must lie in (0, 1]"));
        }
        Ok(())
    }
}

/// Angular budget per point and the spacing buffer for one run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacing {
    pub width: f64,
    pub buffer: f64,
}

impl Spacing {
    /// `width = 2π/n`, `buffer = scale · 2π/(2n)`.
    pub fn for_count(n: usize, buffer_scale: f64) -> Self {
        let n = n as f64;
        Self {
            width: TAU / n,
            buffer: buffer_scale * TAU / (n * 2.0),
        }
    }
}

/// Point-count distribution for batch generation.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    /// Half-open `[min, max)`; `min` is raised to 3 and an empty range yields `min`.
    Uniform { min: usize, max: usize },
}

impl PointCount {
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => {
                let lo = min.max(MIN_TARGET);
                if max <= lo {
                    lo
                } else {
                    rng.gen_range(lo..max)
                }
            }
        }
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// All requested triplets were produced.
    Done,
    /// No gap was left before the target was reached. The result is still valid.
    Exhausted,
}

/// Result of one generation run, in generation order.
#[derive(Clone, Debug)]
pub struct Generation {
    pub triplets: Vec<Triplet>,
    /// Claimed arcs, sorted by start.
    pub arcs: Vec<Arc>,
    pub status: Status,
    pub spacing: Spacing,
    pub requested: usize,
}

/// Replay token: `(seed, index)` mixed into one RNG so any item of a batch
/// can be regenerated on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Generator errors. Early exhaustion is not one; see `Status::Exhausted`.
#[derive(Debug, PartialEq, Eq)]
pub enum GenError {
    InvalidArgument { reason: String },
}

impl GenError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for GenError {}
