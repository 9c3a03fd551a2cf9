//! 2D geometry for planar face triangulation.
//!
//! Purpose
//! - Take a planar 3D boundary down to 2D (`project`), make it counter-clockwise
//!   (`winding`), and provide the two predicates the ear clipper is built on:
//!   vertex convexity (`classify`) and closed point-in-triangle (`inside`).
//!
//! Assumptions and conventions
//! - Only x/y of the projected points are used; all predicates are exact sign
//!   tests on the 2D cross product except `inside`, which has an inclusive
//!   epsilon (`GeomCfg::eps_inside`).
//! - Counter-clockwise means positive shoelace sum.

pub mod classify;
pub mod inside;
pub mod project;
pub mod rand;
mod types;
pub mod winding;

pub use classify::{classify, VertexClass};
pub use inside::point_in_triangle;
pub use project::{dominant_plane, newell_normal, project_loop, Plane};
pub use types::{cross, GeomCfg, Point2};
pub use winding::{normalize_winding, signed_area, signed_area_twice, Loop2, Winding};

#[cfg(test)]
mod tests;
