//! Ear clipping over an active-vertex cycle.
//!
//! Purpose
//! - Turn a counter-clockwise loop of `n >= 3` points into exactly `n - 2`
//!   triangles, one ear per round.
//!
//! Design
//! - `types`: the flat `prev`/`next`/`active` topology and configuration.
//! - `validate`: per-slot classification and closed-triangle ear test.
//! - `schedule`: the `Running → Done | Failed` state machine.
//! - `emit`: fixed-size triangle buffer and the finished `Mesh`.
//!
//! Assumptions and conventions
//! - The tie-break is the lowest normalized slot among ear-flagged active
//!   vertices, so output does not depend on the backend.
//! - A collinear vertex (`z == 0`) is never an ear, while the blocker test is
//!   inclusive (`>= -eps_inside`). A vertex that is collinear up to rounding can
//!   therefore be convex and still blocked; the scheduler does not reconcile
//!   the two policies.

mod emit;
mod schedule;
mod types;
mod validate;

pub use emit::{Mesh, TriangleEmitter};
pub use schedule::{clip_ears, EarClipper};
pub use types::{ClipCfg, ClipState, Revalidate, Topology, Triangle, VertexStatus};
pub use validate::{blocker, validate_slot};

#[cfg(test)]
mod tests;
