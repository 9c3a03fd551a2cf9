//! Face → mesh pipeline entry points.
//!
//! Every entry point runs the same stages: boundary (STEP text, coordinate
//! tuples or a ready 3D loop) → projection onto the dominant plane → winding
//! normalization → ear clipping → `Mesh`. The `*_with` variants take an
//! explicit backend; the plain ones use `DefaultBackend`.
//!
//! Every entry point drops consecutive coincident points (and a closing copy
//! of the first point) within `GeomCfg::eps_coincide`. Mesh positions are the
//! remaining points in input order and triangle indices refer to them.

use crate::boundary::{BoundaryLoop, Point3};
use crate::earclip::{clip_ears, ClipCfg, Mesh};
use crate::error::Result;
use crate::exec::{Backend, DefaultBackend};
use crate::geom2::{normalize_winding, project_loop, GeomCfg, Loop2, Point2};
use crate::step::{extract_boundary, StepModel};

pub fn mesh_from_step(text: &str, geom: GeomCfg, clip: ClipCfg) -> Result<Mesh> {
    mesh_from_step_with(&DefaultBackend::default(), text, geom, clip)
}

pub fn mesh_from_step_with<B: Backend>(
    backend: &B,
    text: &str,
    geom: GeomCfg,
    clip: ClipCfg,
) -> Result<Mesh> {
    let model = StepModel::parse(text)?;
    let boundary = extract_boundary(&model, geom)?;
    triangulate_boundary(backend, &boundary, geom, clip)
}

/// Points with 2 (z = 0) or 3 coordinates each.
pub fn mesh_from_points<C: AsRef<[f64]>>(points: &[C], geom: GeomCfg, clip: ClipCfg) -> Result<Mesh> {
    mesh_from_points_with(&DefaultBackend::default(), points, geom, clip)
}

pub fn mesh_from_points_with<B: Backend, C: AsRef<[f64]>>(
    backend: &B,
    points: &[C],
    geom: GeomCfg,
    clip: ClipCfg,
) -> Result<Mesh> {
    let boundary = BoundaryLoop::from_coords(points, geom.eps_coincide)?;
    triangulate_boundary(backend, &boundary, geom, clip)
}

/// Planar 3D loop.
pub fn mesh_from_loop(points: &[Point3], geom: GeomCfg, clip: ClipCfg) -> Result<Mesh> {
    mesh_from_loop_with(&DefaultBackend::default(), points, geom, clip)
}

pub fn mesh_from_loop_with<B: Backend>(
    backend: &B,
    points: &[Point3],
    geom: GeomCfg,
    clip: ClipCfg,
) -> Result<Mesh> {
    let boundary = BoundaryLoop::dedup(points.iter().copied(), geom.eps_coincide)?;
    triangulate_boundary(backend, &boundary, geom, clip)
}

/// Triangulate a 2D loop; positions get z = 0.
pub fn triangulate_2d(points: &[Point2], geom: GeomCfg, clip: ClipCfg) -> Result<Mesh> {
    triangulate_2d_with(&DefaultBackend::default(), points, geom, clip)
}

pub fn triangulate_2d_with<B: Backend>(
    backend: &B,
    points: &[Point2],
    geom: GeomCfg,
    clip: ClipCfg,
) -> Result<Mesh> {
    let lifted = points.iter().map(|p| Point3::new(p.x, p.y, 0.0));
    let boundary = BoundaryLoop::dedup(lifted, geom.eps_coincide)?;
    // A loop in z = 0 projects onto XY unchanged.
    triangulate_boundary(backend, &boundary, geom, clip)
}

fn triangulate_boundary<B: Backend>(
    backend: &B,
    boundary: &BoundaryLoop,
    geom: GeomCfg,
    clip: ClipCfg,
) -> Result<Mesh> {
    let (plane, flat) = project_loop(boundary.points());
    tracing::debug!(?plane, vertices = boundary.len(), "projected boundary");
    triangulate_flat(backend, flat, flat_positions(boundary.points()), geom, clip)
}

fn triangulate_flat<B: Backend>(
    backend: &B,
    flat: Vec<Point2>,
    positions: Vec<f32>,
    geom: GeomCfg,
    clip: ClipCfg,
) -> Result<Mesh> {
    let mut lp = Loop2::new(flat);
    let winding = normalize_winding(&mut lp)?;
    tracing::debug!(
        vertices = lp.len(),
        ?winding,
        backend = backend.name(),
        "triangulating loop"
    );
    clip_ears(backend, &lp, positions, geom, clip)
}

fn flat_positions(points: &[Point3]) -> Vec<f32> {
    points
        .iter()
        .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
        .collect()
}
