//! Ordered face boundary in 3D.
//!
//! Assumptions and conventions
//! - The loop is implicitly closed (last point connects to the first); the
//!   closing duplicate is never stored.
//! - Points are unique within `GeomCfg::eps_coincide` per axis between
//!   consecutive entries. Non-adjacent duplicates are not detected.
//! - A loop is owned by one pipeline invocation and never shared.

use nalgebra::Vector3;

use crate::error::{MeshError, Result};

pub type Point3 = Vector3<f64>;

/// Per-axis coincidence test.
#[inline]
pub fn coincident(a: &Point3, b: &Point3, eps: f64) -> bool {
    (a - b).iter().all(|d| d.abs() < eps)
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryLoop {
    points: Vec<Point3>,
}

impl BoundaryLoop {
    /// Validate an already deduplicated loop: at least 3 points, all finite.
    pub fn new(points: Vec<Point3>) -> Result<Self> {
        if points.len() < 3 {
            return Err(MeshError::LoopTooShort {
                count: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.iter().all(|c| c.is_finite())) {
            return Err(MeshError::NonFiniteCoordinate { index });
        }
        Ok(Self { points })
    }

    /// Build from raw coordinate tuples with 2 (z = 0) or 3 components.
    ///
    /// Consecutive coincident points and a trailing copy of the first point
    /// are dropped before validation.
    pub fn from_coords<C: AsRef<[f64]>>(coords: &[C], eps: f64) -> Result<Self> {
        let mut points: Vec<Point3> = Vec::with_capacity(coords.len());
        for (index, c) in coords.iter().enumerate() {
            let p = match *c.as_ref() {
                [x, y] => Point3::new(x, y, 0.0),
                [x, y, z] => Point3::new(x, y, z),
                ref other => {
                    return Err(MeshError::InvalidPointDimension {
                        index,
                        dim: other.len(),
                    })
                }
            };
            points.push(p);
        }
        Self::dedup(points, eps)
    }

    /// Drop consecutive coincident points and a trailing copy of the first
    /// point, then validate.
    pub fn dedup<I: IntoIterator<Item = Point3>>(points: I, eps: f64) -> Result<Self> {
        let mut unique: Vec<Point3> = Vec::new();
        for p in points {
            push_unique(&mut unique, p, eps);
        }
        close_loop(&mut unique, eps);
        Self::new(unique)
    }

    #[inline]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}

/// Append `p` unless it coincides with the current last point.
pub(crate) fn push_unique(points: &mut Vec<Point3>, p: Point3, eps: f64) -> bool {
    if points.last().is_some_and(|last| coincident(last, &p, eps)) {
        return false;
    }
    points.push(p);
    true
}

/// Drop a trailing point that repeats the first one.
pub(crate) fn close_loop(points: &mut Vec<Point3>, eps: f64) {
    if points.len() >= 2 && coincident(&points[0], &points[points.len() - 1], eps) {
        points.pop();
    }
}
