//! JSON input/output for the mesh commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use facemesh::Mesh;
use serde::{Deserialize, Serialize};

/// On-disk mesh: flat `positions` (x, y, z per vertex) and `indices` (3 per triangle).
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct MeshDoc {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub positions: Vec<f32>,
    pub indices: Vec<u32>,
}

impl From<&Mesh> for MeshDoc {
    fn from(mesh: &Mesh) -> Self {
        Self {
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            positions: mesh.positions.clone(),
            indices: mesh.indices.clone(),
        }
    }
}

/// Summary recorded in the provenance sidecar.
#[derive(Serialize, Debug)]
pub struct Summary {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub area: f64,
}

impl From<&Mesh> for Summary {
    fn from(mesh: &Mesh) -> Self {
        Self {
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            area: mesh.area(),
        }
    }
}

pub fn write_mesh(path: &Path, mesh: &Mesh) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let doc = MeshDoc::from(mesh);
    fs::write(path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))
}

/// Read a JSON array of coordinate arrays, e.g. `[[0,0],[4,0,0],[4,3]]`.
pub fn read_points(path: &Path) -> Result<Vec<Vec<f64>>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing points in {}", path.display()))
}
