//! Entity store keyed by instance id, with typed lookups.

use std::collections::BTreeMap;

use super::entity::{AdvancedFace, EdgeCurve, Entity, EntityKind, FaceBound, OrientedEdge};
use super::{lexer, parser};
use crate::boundary::Point3;
use crate::error::{MeshError, Result};

/// Recognized entities of one exchange file. Unrecognized types are not stored.
#[derive(Clone, Debug, Default)]
pub struct StepModel {
    entities: BTreeMap<u64, Entity>,
}

impl StepModel {
    pub fn parse(text: &str) -> Result<Self> {
        let tokens = lexer::tokenize(text)?;
        let raws = parser::parse_instances(&tokens)?;
        let mut model = StepModel::default();
        let mut ignored = 0usize;
        for raw in &raws {
            let Some(entity) = Entity::from_raw(raw)? else {
                ignored += 1;
                continue;
            };
            let kind = entity.kind();
            if model.entities.insert(raw.id, entity).is_some() {
                return Err(MeshError::MalformedEntity {
                    id: raw.id,
                    kind,
                    reason: format!("duplicate instance id (line {})", raw.line),
                });
            }
        }
        tracing::debug!(
            instances = raws.len(),
            recognized = model.entities.len(),
            ignored,
            "parsed exchange file"
        );
        Ok(model)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Faces in ascending id order.
    pub fn faces(&self) -> impl Iterator<Item = (u64, &AdvancedFace)> {
        self.entities.iter().filter_map(|(&id, e)| match e {
            Entity::AdvancedFace(f) => Some((id, f)),
            _ => None,
        })
    }

    fn missing(id: u64, kind: EntityKind) -> MeshError {
        MeshError::MissingEntity { id, kind }
    }

    pub fn point(&self, id: u64) -> Result<Point3> {
        match self.get(id) {
            Some(Entity::CartesianPoint(p)) => Ok(*p),
            _ => Err(Self::missing(id, EntityKind::CartesianPoint)),
        }
    }

    /// Position of a `VERTEX_POINT` (two hops: vertex → point).
    pub fn vertex_position(&self, id: u64) -> Result<Point3> {
        match self.get(id) {
            Some(Entity::VertexPoint { point }) => self.point(*point),
            _ => Err(Self::missing(id, EntityKind::VertexPoint)),
        }
    }

    pub fn edge_curve(&self, id: u64) -> Result<&EdgeCurve> {
        match self.get(id) {
            Some(Entity::EdgeCurve(e)) => Ok(e),
            _ => Err(Self::missing(id, EntityKind::EdgeCurve)),
        }
    }

    pub fn oriented_edge(&self, id: u64) -> Result<&OrientedEdge> {
        match self.get(id) {
            Some(Entity::OrientedEdge(e)) => Ok(e),
            _ => Err(Self::missing(id, EntityKind::OrientedEdge)),
        }
    }

    pub fn edge_loop(&self, id: u64) -> Result<&[u64]> {
        match self.get(id) {
            Some(Entity::EdgeLoop(edges)) => Ok(edges),
            _ => Err(Self::missing(id, EntityKind::EdgeLoop)),
        }
    }

    /// Outer or inner face bound.
    pub fn bound(&self, id: u64) -> Result<&FaceBound> {
        match self.get(id) {
            Some(Entity::FaceBound(b)) => Ok(b),
            _ => Err(Self::missing(id, EntityKind::FaceOuterBound)),
        }
    }
}
