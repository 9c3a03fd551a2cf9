//! Minimal boundary-representation reader (exchange-file text → boundary loop).
//!
//! Purpose
//! - Resolve the small entity graph of one planar face (points, vertices,
//!   edges, oriented edges, an edge loop, a face bound, a face) into one
//!   ordered point loop for triangulation.
//!
//! Design
//! - `lexer` turns text into tokens (comments stripped), `parser` turns tokens
//!   into `#id = KEYWORD(params)` records, `entity` converts the recognized
//!   keywords into typed variants, `model` stores them by id, `extract` walks
//!   the face.
//! - Recognized entities with malformed arguments are errors; unrecognized
//!   entity types (PLANE, LINE, DIRECTION, ...) are ignored.
//!
//! Recognized shapes
//! - `CARTESIAN_POINT('', (x, y[, z]))`
//! - `VERTEX_POINT('', #point)`
//! - `EDGE_CURVE('', #start, #end, #curve, .T./.F.)`
//! - `ORIENTED_EDGE('', *, *, #edge_curve, .T./.F.)`
//! - `EDGE_LOOP('', (#oriented_edge, ...))`
//! - `FACE_OUTER_BOUND('', #edge_loop, .T./.F.)` and `FACE_BOUND` (inner; rejected)
//! - `ADVANCED_FACE('', (#bound, ...), #surface, .T./.F.)`

mod entity;
mod extract;
mod lexer;
mod model;
mod parser;

pub use entity::{AdvancedFace, EdgeCurve, Entity, EntityKind, FaceBound, OrientedEdge};
pub use extract::extract_boundary;
pub use model::StepModel;
