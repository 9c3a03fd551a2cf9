//! Per-vertex convexity from the two current neighbors.
//!
//! Exact sign test: `z > 0` convex, `z < 0` reflex, `z == 0` collinear. The
//! ear test (`inside`) is inclusive with a small epsilon instead, so a vertex
//! that is collinear only up to rounding may be classified convex here and
//! still be blocked there. The two policies are not aligned.

use super::types::{cross, Point2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VertexClass {
    Reflex,
    Convex,
    /// Never ear-eligible.
    Collinear,
}

impl VertexClass {
    #[inline]
    pub fn is_convex(self) -> bool {
        self == VertexClass::Convex
    }
}

/// Turning of the path `prev → cur → next` for a counter-clockwise loop.
#[inline]
pub fn turn(prev: Point2, cur: Point2, next: Point2) -> f64 {
    cross(cur - prev, next - cur)
}

#[inline]
pub fn classify(prev: Point2, cur: Point2, next: Point2) -> VertexClass {
    let z = turn(prev, cur, next);
    if z > 0.0 {
        VertexClass::Convex
    } else if z < 0.0 {
        VertexClass::Reflex
    } else {
        VertexClass::Collinear
    }
}
