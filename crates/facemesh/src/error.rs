//! Error taxonomy for the face → mesh pipeline.
//!
//! Every failure aborts the whole invocation; no partial `Mesh` is ever
//! returned. Extraction errors carry the offending entity id and type,
//! triangulation errors carry the clipping round and the active-vertex count.

use crate::step::EntityKind;

pub type Result<T> = std::result::Result<T, MeshError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("malformed {kind} #{id}: {reason}")]
    MalformedEntity {
        id: u64,
        kind: EntityKind,
        reason: String,
    },

    #[error("{kind} #{id} not found")]
    MissingEntity { id: u64, kind: EntityKind },

    #[error("no ADVANCED_FACE found")]
    NoFace,

    #[error("expected exactly one ADVANCED_FACE, found {count}")]
    AmbiguousFace { count: usize },

    #[error("face #{face} has {outer} outer and {inner} inner bounds; expected exactly one outer bound")]
    UnsupportedBounds { face: u64, outer: usize, inner: usize },

    #[error("boundary loop has {count} unique points; need at least 3")]
    LoopTooShort { count: usize },

    /// Coordinate-tuple input (`mesh_from_points`); `index` is the position
    /// in the caller's slice. A `CARTESIAN_POINT` with the wrong coordinate
    /// count is a `MalformedEntity` instead, so it keeps its entity id and type.
    #[error("point {index} has {dim} coordinates; expected 2 or 3")]
    InvalidPointDimension { index: usize, dim: usize },

    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("degenerate polygon: signed area is zero (collinear or self-overlapping loop)")]
    DegeneratePolygon,

    #[error("no ear found in round {round} with {active} active vertices")]
    NoEarFound { round: usize, active: usize },

    #[error("incomplete mesh: expected {expected} triangles, emitted {emitted}")]
    IncompleteMesh { expected: usize, emitted: usize },
}
