//! Signed area and winding normalization.
//!
//! Counter-clockwise order is a hard precondition of classification, ear
//! validation and clipping. `normalize_winding` establishes it.

use super::types::{cross, Point2};
use crate::error::{MeshError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

/// Unhalved shoelace sum `Σ (x_i y_{i+1} − x_{i+1} y_i)`, wrapping last → first.
pub fn signed_area_twice(points: &[Point2]) -> f64 {
    let n = points.len();
    (0..n).map(|i| cross(points[i], points[(i + 1) % n])).sum()
}

#[inline]
pub fn signed_area(points: &[Point2]) -> f64 {
    0.5 * signed_area_twice(points)
}

/// 2D loop plus, per slot, the index of that point in the caller's input.
#[derive(Clone, Debug, PartialEq)]
pub struct Loop2 {
    pub points: Vec<Point2>,
    pub source: Vec<usize>,
}

impl Loop2 {
    pub fn new(points: Vec<Point2>) -> Self {
        let source = (0..points.len()).collect();
        Self { points, source }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Reverse the cyclic direction in place; slot 0 keeps its point.
    pub fn reverse(&mut self) {
        if self.points.len() > 1 {
            self.points[1..].reverse();
            self.source[1..].reverse();
        }
    }
}

/// Make the loop counter-clockwise; returns the winding it had on input.
///
/// An exactly zero area sum is `DegeneratePolygon` (collinear points or a
/// loop that overlaps itself with zero net area).
pub fn normalize_winding(lp: &mut Loop2) -> Result<Winding> {
    let sum = signed_area_twice(&lp.points);
    if sum == 0.0 || !sum.is_finite() {
        return Err(MeshError::DegeneratePolygon);
    }
    if sum > 0.0 {
        return Ok(Winding::CounterClockwise);
    }
    lp.reverse();
    Ok(Winding::Clockwise)
}
