//! Classification and ear validation of a single active slot.
//!
//! Both read the topology only; the scheduler never runs them while it is
//! splicing.

use crate::geom2::{classify, point_in_triangle, Point2};

use super::types::{Topology, VertexStatus};

/// Classify slot `i` against its current neighbors and, if convex, run the
/// ear test.
pub fn validate_slot(points: &[Point2], topo: &Topology, i: usize, eps_inside: f64) -> VertexStatus {
    let (p, n) = (topo.prev(i), topo.next(i));
    let class = classify(points[p], points[i], points[n]);
    let ear = class.is_convex() && blocker(points, topo, i, eps_inside).is_none();
    VertexStatus { class, ear }
}

/// First active slot other than `i` and its neighbors that lies in the closed
/// triangle `(prev, i, next)`.
///
/// Walks the cycle from `next.next` up to `prev`, so the scan costs one step
/// per remaining active vertex and stops at the first hit.
pub fn blocker(points: &[Point2], topo: &Topology, i: usize, eps_inside: f64) -> Option<usize> {
    let (p, n) = (topo.prev(i), topo.next(i));
    let (a, b, c) = (points[p], points[i], points[n]);
    let mut j = topo.next(n);
    while j != p {
        if point_in_triangle(a, b, c, points[j], eps_inside) {
            return Some(j);
        }
        j = topo.next(j);
    }
    None
}
