//! Basic 2D helpers and tolerances shared by the triangulation stages.
//!
//! - `GeomCfg`: centralizes the coincidence and point-in-triangle epsilons.
//! - `cross`: z-component of the 2D cross product, used by every predicate.

use nalgebra::Vector2;

pub type Point2 = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Per-axis tolerance under which two boundary points are the same point.
    pub eps_coincide: f64,
    /// Inclusive slack of the point-in-triangle test: a blocker counts as
    /// inside when every edge cross value is `>= -eps_inside`.
    pub eps_inside: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_coincide: 1e-9,
            eps_inside: 1e-12,
        }
    }
}

/// `a.x * b.y - a.y * b.x`.
#[inline]
pub fn cross(a: Point2, b: Point2) -> f64 {
    a.x * b.y - a.y * b.x
}
