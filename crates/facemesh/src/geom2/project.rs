//! Planar 3D loop → 2D loop.
//!
//! The face is planar, so one coordinate axis can be dropped. We drop the axis
//! along which the Newell normal is largest. The remaining pair is taken in
//! cyclic order (x,y), (y,z), (z,x) regardless of the normal's sign, so a loop
//! that is clockwise in its plane stays clockwise after projection and the
//! winding normalizer sees it.

use nalgebra::Vector3;

use super::types::Point2;
use crate::boundary::Point3;

/// Coordinate plane a loop is projected onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plane {
    Xy,
    Yz,
    Zx,
}

impl Plane {
    #[inline]
    pub fn project(self, p: &Point3) -> Point2 {
        match self {
            Plane::Xy => Point2::new(p.x, p.y),
            Plane::Yz => Point2::new(p.y, p.z),
            Plane::Zx => Point2::new(p.z, p.x),
        }
    }
}

/// Newell's area-weighted normal (not normalized; zero for collinear loops).
pub fn newell_normal(points: &[Point3]) -> Vector3<f64> {
    let mut n = Vector3::zeros();
    let Some(mut prev) = points.last() else {
        return n;
    };
    for cur in points {
        n.x += (prev.y - cur.y) * (prev.z + cur.z);
        n.y += (prev.z - cur.z) * (prev.x + cur.x);
        n.z += (prev.x - cur.x) * (prev.y + cur.y);
        prev = cur;
    }
    n
}

/// Plane with the largest normal component; ties prefer `Xy`, then `Yz`.
pub fn dominant_plane(points: &[Point3]) -> Plane {
    let n = newell_normal(points);
    let (ax, ay, az) = (n.x.abs(), n.y.abs(), n.z.abs());
    if az >= ax && az >= ay {
        Plane::Xy
    } else if ax >= ay {
        Plane::Yz
    } else {
        Plane::Zx
    }
}

/// Project a loop onto its dominant plane.
pub fn project_loop(points: &[Point3]) -> (Plane, Vec<Point2>) {
    let plane = dominant_plane(points);
    (plane, points.iter().map(|p| plane.project(p)).collect())
}
