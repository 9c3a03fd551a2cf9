//! Face → ordered boundary loop.
//!
//! Walks the outer edge loop of the single face in listed order. Each oriented
//! edge contributes the start point of its underlying edge (end point when the
//! orientation flag is `.F.`). Bound and face sense flags are not applied:
//! downstream winding normalization fixes the orientation anyway.

use super::model::StepModel;
use crate::boundary::{close_loop, coincident, push_unique, BoundaryLoop, Point3};
use crate::error::{MeshError, Result};
use crate::geom2::GeomCfg;

/// Resolve the one `ADVANCED_FACE` of `model` into its boundary loop.
pub fn extract_boundary(model: &StepModel, cfg: GeomCfg) -> Result<BoundaryLoop> {
    let mut faces = model.faces();
    let (face_id, face) = faces.next().ok_or(MeshError::NoFace)?;
    let extra = faces.count();
    if extra > 0 {
        return Err(MeshError::AmbiguousFace { count: extra + 1 });
    }

    let mut outer = Vec::new();
    let mut inner = 0usize;
    for &bound_id in &face.bounds {
        let bound = model.bound(bound_id)?;
        if bound.outer {
            outer.push(bound);
        } else {
            inner += 1;
        }
    }
    let [bound] = outer.as_slice() else {
        return Err(MeshError::UnsupportedBounds {
            face: face_id,
            outer: outer.len(),
            inner,
        });
    };
    if inner > 0 {
        return Err(MeshError::UnsupportedBounds {
            face: face_id,
            outer: 1,
            inner,
        });
    }

    let edges = model.edge_loop(bound.edge_loop)?;
    let mut points: Vec<Point3> = Vec::with_capacity(edges.len());
    let mut prev_end: Option<(u64, Point3)> = None;
    for &oe_id in edges {
        let oe = model.oriented_edge(oe_id)?;
        let edge = model.edge_curve(oe.edge)?;
        let (start_id, end_id) = if oe.orientation {
            (edge.start, edge.end)
        } else {
            (edge.end, edge.start)
        };
        let start = model.vertex_position(start_id)?;
        let end = model.vertex_position(end_id)?;
        if let Some((prev_id, prev)) = prev_end {
            if !coincident(&prev, &start, cfg.eps_coincide) {
                tracing::warn!(
                    oriented_edge = oe_id,
                    previous_edge = prev_id,
                    "edge loop is discontinuous"
                );
            }
        }
        push_unique(&mut points, start, cfg.eps_coincide);
        prev_end = Some((oe_id, end));
    }
    close_loop(&mut points, cfg.eps_coincide);
    tracing::debug!(
        face = face_id,
        edge_loop = bound.edge_loop,
        edges = edges.len(),
        points = points.len(),
        "extracted boundary loop"
    );
    BoundaryLoop::new(points)
}
