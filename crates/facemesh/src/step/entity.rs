//! Typed boundary-representation entities.
//!
//! Each recognized entity type becomes one variant carrying its validated
//! fields. A recognized type with the wrong argument shape is an error
//! (`MalformedEntity`); unrecognized types are dropped by the caller.

use std::fmt;

use nalgebra::Vector3;

use super::parser::{Param, RawInstance};
use crate::error::{MeshError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    CartesianPoint,
    VertexPoint,
    EdgeCurve,
    OrientedEdge,
    EdgeLoop,
    FaceOuterBound,
    FaceBound,
    AdvancedFace,
}

impl EntityKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "CARTESIAN_POINT" => Self::CartesianPoint,
            "VERTEX_POINT" => Self::VertexPoint,
            "EDGE_CURVE" => Self::EdgeCurve,
            "ORIENTED_EDGE" => Self::OrientedEdge,
            "EDGE_LOOP" => Self::EdgeLoop,
            "FACE_OUTER_BOUND" => Self::FaceOuterBound,
            "FACE_BOUND" => Self::FaceBound,
            "ADVANCED_FACE" => Self::AdvancedFace,
            _ => return None,
        })
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::CartesianPoint => "CARTESIAN_POINT",
            Self::VertexPoint => "VERTEX_POINT",
            Self::EdgeCurve => "EDGE_CURVE",
            Self::OrientedEdge => "ORIENTED_EDGE",
            Self::EdgeLoop => "EDGE_LOOP",
            Self::FaceOuterBound => "FACE_OUTER_BOUND",
            Self::FaceBound => "FACE_BOUND",
            Self::AdvancedFace => "ADVANCED_FACE",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeCurve {
    pub start: u64,
    pub end: u64,
    /// Underlying curve geometry; straight edges are assumed, so it is not read.
    pub curve: u64,
    pub same_sense: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedEdge {
    pub edge: u64,
    /// `false` means the edge is traversed end → start.
    pub orientation: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceBound {
    pub edge_loop: u64,
    pub orientation: bool,
    /// `FACE_OUTER_BOUND` rather than a plain (inner) `FACE_BOUND`.
    pub outer: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AdvancedFace {
    pub bounds: Vec<u64>,
    pub surface: u64,
    pub same_sense: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    CartesianPoint(Vector3<f64>),
    VertexPoint { point: u64 },
    EdgeCurve(EdgeCurve),
    OrientedEdge(OrientedEdge),
    EdgeLoop(Vec<u64>),
    FaceBound(FaceBound),
    AdvancedFace(AdvancedFace),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::CartesianPoint(_) => EntityKind::CartesianPoint,
            Entity::VertexPoint { .. } => EntityKind::VertexPoint,
            Entity::EdgeCurve(_) => EntityKind::EdgeCurve,
            Entity::OrientedEdge(_) => EntityKind::OrientedEdge,
            Entity::EdgeLoop(_) => EntityKind::EdgeLoop,
            Entity::FaceBound(b) if b.outer => EntityKind::FaceOuterBound,
            Entity::FaceBound(_) => EntityKind::FaceBound,
            Entity::AdvancedFace(_) => EntityKind::AdvancedFace,
        }
    }

    /// Convert a raw instance. `Ok(None)` for entity types this crate ignores.
    pub(crate) fn from_raw(raw: &RawInstance) -> Result<Option<Entity>> {
        let Some(kind) = raw.keyword.as_deref().and_then(EntityKind::from_keyword) else {
            return Ok(None);
        };
        let args = Args {
            id: raw.id,
            kind,
            params: &raw.params,
        };
        let entity = match kind {
            EntityKind::CartesianPoint => {
                args.arity(2)?;
                let coords = args.list(1)?;
                let mut xyz = Vec::with_capacity(3);
                for p in coords {
                    match p {
                        Param::Num(v) => xyz.push(*v),
                        other => return Err(args.malformed(format!("non-numeric coordinate {other:?}"))),
                    }
                }
                match *xyz.as_slice() {
                    [x, y] => Entity::CartesianPoint(Vector3::new(x, y, 0.0)),
                    [x, y, z] => Entity::CartesianPoint(Vector3::new(x, y, z)),
                    _ => {
                        return Err(args.malformed(format!(
                            "expected 2 or 3 coordinates, found {}",
                            xyz.len()
                        )))
                    }
                }
            }
            EntityKind::VertexPoint => {
                args.arity(2)?;
                Entity::VertexPoint {
                    point: args.reference(1)?,
                }
            }
            EntityKind::EdgeCurve => {
                args.arity(5)?;
                Entity::EdgeCurve(EdgeCurve {
                    start: args.reference(1)?,
                    end: args.reference(2)?,
                    curve: args.reference(3)?,
                    same_sense: args.boolean(4)?,
                })
            }
            EntityKind::OrientedEdge => {
                args.arity(5)?;
                Entity::OrientedEdge(OrientedEdge {
                    edge: args.reference(3)?,
                    orientation: args.boolean(4)?,
                })
            }
            EntityKind::EdgeLoop => {
                args.arity(2)?;
                Entity::EdgeLoop(args.reference_list(1)?)
            }
            EntityKind::FaceOuterBound | EntityKind::FaceBound => {
                args.arity(3)?;
                Entity::FaceBound(FaceBound {
                    edge_loop: args.reference(1)?,
                    orientation: args.boolean(2)?,
                    outer: kind == EntityKind::FaceOuterBound,
                })
            }
            EntityKind::AdvancedFace => {
                args.arity(4)?;
                Entity::AdvancedFace(AdvancedFace {
                    bounds: args.reference_list(1)?,
                    surface: args.reference(2)?,
                    same_sense: args.boolean(3)?,
                })
            }
        };
        Ok(Some(entity))
    }
}

struct Args<'a> {
    id: u64,
    kind: EntityKind,
    params: &'a [Param],
}

impl<'a> Args<'a> {
    fn malformed(&self, reason: impl Into<String>) -> MeshError {
        MeshError::MalformedEntity {
            id: self.id,
            kind: self.kind,
            reason: reason.into(),
        }
    }

    fn arity(&self, n: usize) -> Result<()> {
        if self.params.len() != n {
            return Err(self.malformed(format!(
                "expected {n} arguments, found {}",
                self.params.len()
            )));
        }
        Ok(())
    }

    fn reference(&self, k: usize) -> Result<u64> {
        match &self.params[k] {
            Param::Ref(id) => Ok(*id),
            other => Err(self.malformed(format!("argument {k}: expected #id, found {other:?}"))),
        }
    }

    fn boolean(&self, k: usize) -> Result<bool> {
        match &self.params[k] {
            Param::Enum(e) if e == "T" => Ok(true),
            Param::Enum(e) if e == "F" => Ok(false),
            other => Err(self.malformed(format!("argument {k}: expected .T. or .F., found {other:?}"))),
        }
    }

    fn list(&self, k: usize) -> Result<&'a [Param]> {
        let params: &'a [Param] = self.params;
        match &params[k] {
            Param::List(items) => Ok(items),
            other => Err(self.malformed(format!("argument {k}: expected a list, found {other:?}"))),
        }
    }

    fn reference_list(&self, k: usize) -> Result<Vec<u64>> {
        self.list(k)?
            .iter()
            .map(|p| match p {
                Param::Ref(id) => Ok(*id),
                other => Err(self.malformed(format!("argument {k}: expected #id in list, found {other:?}"))),
            })
            .collect()
    }
}
