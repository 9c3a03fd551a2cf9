//! Random simple polygons in 2D (star-shaped, radial jitter + replay tokens).
//!
//! Purpose
//! - Reproducible non-convex test and benchmark input for the ear clipper.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular
//!   jitter, then give every vertex an independent radius. The jitter is
//!   clamped below half the spacing Δ (at most 0.45Δ), so the angles stay
//!   strictly increasing in vertex order and the loop is simple (star-shaped
//!   around the origin) and counter-clockwise without any sorting.
//! - Large `radial_jitter` produces deep reflex notches.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point2;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                rng.gen_range(lo..=max.max(lo))
            }
        }
    }
}

/// Star polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.45].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`,
    /// clamped to [0, 0.95].
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub random_phase: bool,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(16),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.6,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    fn rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw a simple counter-clockwise polygon with at least 3 vertices.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let delta = std::f64::consts::TAU / (n as f64);
    // Every angular gap stays below π, so the origin is in the kernel.
    let aj = cfg
        .angle_jitter_frac
        .clamp(0.0, 0.45)
        .min(0.49 * (std::f64::consts::PI / delta - 1.0));
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let theta = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = r0 * (1.0 + u);
            Vector2::new(theta.cos() * r, theta.sin() * r)
        })
        .collect()
}
