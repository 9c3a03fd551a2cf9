//! Round-based ear-clipping state machine.
//!
//! A round is: pick the lowest ear-flagged active slot, emit its triangle,
//! splice it out, then revalidate. Classification and ear tests go through
//! `Backend::parallel_for` and only read the topology; the clip itself is
//! applied afterwards on the calling thread, which is the barrier between
//! "classify + validate" and "apply".

use crate::error::{MeshError, Result};
use crate::exec::Backend;
use crate::geom2::{GeomCfg, Loop2};

use super::emit::{Mesh, TriangleEmitter};
use super::types::{ClipCfg, ClipState, Revalidate, Topology, Triangle, VertexStatus};
use super::validate::validate_slot;

/// Ear clipper over one counter-clockwise loop.
pub struct EarClipper<'a, B: Backend> {
    lp: &'a Loop2,
    backend: &'a B,
    geom: GeomCfg,
    clip: ClipCfg,
    topo: Topology,
    status: Vec<VertexStatus>,
    emitter: TriangleEmitter,
    round: usize,
    state: ClipState,
    /// Some non-neighbor ear flags may be stale (false negatives only).
    stale: bool,
}

impl<'a, B: Backend> EarClipper<'a, B> {
    /// Start in `Running` with every slot active and classified.
    ///
    /// `lp` must already be counter-clockwise with at least 3 points.
    pub fn new(lp: &'a Loop2, geom: GeomCfg, clip: ClipCfg, backend: &'a B) -> Self {
        let n = lp.len();
        let mut me = Self {
            lp,
            backend,
            geom,
            clip,
            topo: Topology::new(n),
            status: vec![VertexStatus::CLIPPED; n],
            emitter: TriangleEmitter::new(n),
            round: 0,
            state: if n >= 3 {
                ClipState::Running
            } else {
                ClipState::Failed
            },
            stale: false,
        };
        if me.state == ClipState::Running {
            me.revalidate_all();
        }
        me
    }

    #[inline]
    pub fn state(&self) -> ClipState {
        self.state
    }

    #[inline]
    pub fn round(&self) -> usize {
        self.round
    }

    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topo
    }

    #[inline]
    pub fn status(&self, slot: usize) -> VertexStatus {
        self.status[slot]
    }

    /// Run one round. Returns the emitted triangle (caller indices), or
    /// `None` once `Done`.
    pub fn step(&mut self) -> Result<Option<Triangle>> {
        match self.state {
            ClipState::Done => return Ok(None),
            ClipState::Failed => return Err(self.no_ear()),
            ClipState::Running => {}
        }
        let Some(i) = self.select() else {
            self.state = ClipState::Failed;
            return Err(self.no_ear());
        };
        let (p, n) = (self.topo.prev(i), self.topo.next(i));
        let src = &self.lp.source;
        let tri = Triangle {
            prev: src[p],
            cur: src[i],
            next: src[n],
        };
        self.emitter.push(tri);
        self.topo.splice_out(i);
        self.status[i] = VertexStatus::CLIPPED;
        tracing::trace!(
            round = self.round,
            slot = i,
            active = self.topo.active_count(),
            "clipped ear"
        );

        if self.topo.active_count() == 2 {
            self.state = ClipState::Done;
            return Ok(Some(tri));
        }
        self.round += 1;
        match self.clip.revalidate {
            Revalidate::Neighbors => self.revalidate(&[p, n]),
            Revalidate::Full => self.revalidate_all(),
        }
        Ok(Some(tri))
    }

    /// Drive to `Done` and hand out the mesh built over `positions`.
    pub fn run(mut self, positions: Vec<f32>) -> Result<Mesh> {
        while self.step()?.is_some() {}
        tracing::debug!(
            triangles = self.emitter.emitted(),
            rounds = self.round + 1,
            "ear clipping done"
        );
        self.emitter.finish(positions)
    }

    /// Lowest ear-flagged active slot. Stale flags get one full pass first.
    fn select(&mut self) -> Option<usize> {
        if let Some(i) = self.first_ear() {
            return Some(i);
        }
        if self.stale {
            tracing::warn!(
                round = self.round,
                active = self.topo.active_count(),
                "no ear among neighbor-updated flags; revalidating all vertices"
            );
            self.revalidate_all();
            return self.first_ear();
        }
        None
    }

    fn first_ear(&self) -> Option<usize> {
        (0..self.topo.len()).find(|&i| self.topo.is_active(i) && self.status[i].ear)
    }

    fn revalidate_all(&mut self) {
        let slots = self.topo.active_slots();
        self.revalidate(&slots);
        self.stale = false;
    }

    fn revalidate(&mut self, slots: &[usize]) {
        let (points, topo, eps) = (&self.lp.points, &self.topo, self.geom.eps_inside);
        let fresh = self
            .backend
            .parallel_for(slots.len(), |k| validate_slot(points, topo, slots[k], eps));
        for (&i, st) in slots.iter().zip(fresh) {
            self.status[i] = st;
        }
        if slots.len() < self.topo.active_count() {
            self.stale = true;
        }
    }

    fn no_ear(&self) -> MeshError {
        MeshError::NoEarFound {
            round: self.round,
            active: self.topo.active_count(),
        }
    }
}

/// Clip a normalized loop to `n - 2` triangles and wrap them with `positions`.
pub fn clip_ears<B: Backend>(
    backend: &B,
    lp: &Loop2,
    positions: Vec<f32>,
    geom: GeomCfg,
    clip: ClipCfg,
) -> Result<Mesh> {
    EarClipper::new(lp, geom, clip, backend).run(positions)
}
