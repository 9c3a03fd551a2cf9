use super::types::{cross, Point2};

/// Edge cross values `[cross(b−a, p−a), cross(c−b, p−b), cross(a−c, p−c)]`.
#[inline]
pub fn edge_crosses(a: Point2, b: Point2, c: Point2, p: Point2) -> [f64; 3] {
    [
        cross(b - a, p - a),
        cross(c - b, p - b),
        cross(a - c, p - c),
    ]
}

/// Closed point-in-triangle test for a counter-clockwise triangle `(a, b, c)`.
///
/// Points on an edge or a corner count as inside (all three values
/// `>= -eps`).
#[inline]
pub fn point_in_triangle(a: Point2, b: Point2, c: Point2, p: Point2, eps: f64) -> bool {
    edge_crosses(a, b, c, p).iter().all(|&v| v >= -eps)
}
