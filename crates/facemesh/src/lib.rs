//! Planar face → triangle mesh.
//!
//! Reads one planar face (minimal STEP boundary entities, or any ordered loop
//! of coplanar points) and triangulates it by ear clipping.
//!
//! Layout
//! - `step`: tokenizer, entity model and boundary extraction.
//! - `boundary`: the ordered, deduplicated 3D loop.
//! - `geom2`: projection, winding, convexity and point-in-triangle predicates,
//!   random star polygons.
//! - `earclip`: active-vertex topology, ear validation, scheduler, emitter.
//! - `exec`: serial and (feature `parallel`) threaded backends.
//! - `api`: pipeline entry points.
//!
//! The library logs through `tracing` and never prints.

pub mod api;
pub mod boundary;
pub mod earclip;
pub mod error;
pub mod exec;
pub mod geom2;
pub mod step;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use api::{
    mesh_from_loop, mesh_from_loop_with, mesh_from_points, mesh_from_points_with, mesh_from_step,
    mesh_from_step_with, triangulate_2d, triangulate_2d_with,
};
pub use earclip::{ClipCfg, Mesh, Revalidate};
pub use error::{MeshError, Result};
pub use geom2::GeomCfg;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::*;
    pub use crate::boundary::{BoundaryLoop, Point3};
    pub use crate::earclip::{ClipCfg, Mesh, Revalidate};
    pub use crate::error::{MeshError, Result};
    pub use crate::exec::{Backend, DefaultBackend, Serial};
    pub use crate::geom2::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
    pub use crate::geom2::{GeomCfg, Point2};
}
