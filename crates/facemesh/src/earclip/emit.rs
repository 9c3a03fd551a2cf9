//! Triangle accumulation and the finished `Mesh`.

use nalgebra::Vector3;

use crate::error::{MeshError, Result};

use super::types::Triangle;

/// Render-ready triangle list.
///
/// `positions` holds `x, y, z` per vertex in caller order; `indices` holds
/// three vertex indices per counter-clockwise triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<f32>,
    pub indices: Vec<u32>,
}

impl Mesh {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn position(&self, i: usize) -> [f32; 3] {
        [
            self.positions[3 * i],
            self.positions[3 * i + 1],
            self.positions[3 * i + 2],
        ]
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Total unsigned triangle area in 3D.
    pub fn area(&self) -> f64 {
        let at = |i: u32| {
            let [x, y, z] = self.position(i as usize);
            Vector3::new(x as f64, y as f64, z as f64)
        };
        self.triangles()
            .map(|[a, b, c]| {
                let (a, b, c) = (at(a), at(b), at(c));
                0.5 * (b - a).cross(&(c - a)).norm()
            })
            .sum()
    }
}

/// Collects exactly `n - 2` triangles for an `n`-vertex loop.
#[derive(Debug)]
pub struct TriangleEmitter {
    expected: usize,
    indices: Vec<u32>,
}

impl TriangleEmitter {
    pub fn new(vertex_count: usize) -> Self {
        let expected = vertex_count.saturating_sub(2);
        Self {
            expected,
            indices: Vec::with_capacity(3 * expected),
        }
    }

    #[inline]
    pub fn expected(&self) -> usize {
        self.expected
    }

    #[inline]
    pub fn emitted(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn push(&mut self, t: Triangle) {
        debug_assert!(self.emitted() < self.expected, "emitter overflow");
        self.indices
            .extend(t.indices().iter().map(|&i| i as u32));
    }

    /// Hand out the mesh; anything but exactly `n - 2` triangles is refused.
    pub fn finish(self, positions: Vec<f32>) -> Result<Mesh> {
        if self.emitted() != self.expected {
            return Err(MeshError::IncompleteMesh {
                expected: self.expected,
                emitted: self.emitted(),
            });
        }
        Ok(Mesh {
            positions,
            indices: self.indices,
        })
    }
}
