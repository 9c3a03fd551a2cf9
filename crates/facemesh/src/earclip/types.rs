//! Active-vertex topology and scheduler configuration.

use crate::geom2::VertexClass;

/// Doubly linked cycle over slots `0..n`, embedded in flat `prev`/`next` arrays.
///
/// Clipping only flips an `active` bit and rewires two indices. The active
/// slots always form one cycle; its length starts at `n` and only shrinks.
#[derive(Clone, Debug)]
pub struct Topology {
    prev: Vec<usize>,
    next: Vec<usize>,
    active: Vec<bool>,
    active_count: usize,
}

impl Topology {
    /// Cycle `0 → 1 → … → n-1 → 0`.
    pub fn new(n: usize) -> Self {
        Self {
            prev: (0..n).map(|i| (i + n - 1) % n).collect(),
            next: (0..n).map(|i| (i + 1) % n).collect(),
            active: vec![true; n],
            active_count: n,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[inline]
    pub fn prev(&self, i: usize) -> usize {
        self.prev[i]
    }

    #[inline]
    pub fn next(&self, i: usize) -> usize {
        self.next[i]
    }

    #[inline]
    pub fn is_active(&self, i: usize) -> bool {
        self.active[i]
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Active slots in ascending slot order.
    pub fn active_slots(&self) -> Vec<usize> {
        (0..self.len()).filter(|&i| self.active[i]).collect()
    }

    /// Deactivate `i` and link its neighbors to each other.
    pub fn splice_out(&mut self, i: usize) {
        debug_assert!(self.active[i], "slot {i} already clipped");
        let (p, n) = (self.prev[i], self.next[i]);
        self.next[p] = n;
        self.prev[n] = p;
        self.active[i] = false;
        self.active_count -= 1;
    }
}

/// Which vertices the scheduler reclassifies after a clip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Revalidate {
    /// Only the two neighbors of the clipped vertex. A full pass still runs
    /// once before `NoEarFound` is reported.
    #[default]
    Neighbors,
    /// Every active vertex, every round.
    Full,
}

/// Scheduler configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClipCfg {
    pub revalidate: Revalidate,
}

impl ClipCfg {
    pub fn full() -> Self {
        Self {
            revalidate: Revalidate::Full,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipState {
    Running,
    Done,
    Failed,
}

/// Classification plus ear flag for one slot; `ear` implies `Convex`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexStatus {
    pub class: VertexClass,
    pub ear: bool,
}

impl VertexStatus {
    pub const CLIPPED: VertexStatus = VertexStatus {
        class: VertexClass::Collinear,
        ear: false,
    };
}

/// Three caller-side point indices in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub prev: usize,
    pub cur: usize,
    pub next: usize,
}

impl Triangle {
    #[inline]
    pub fn indices(self) -> [usize; 3] {
        [self.prev, self.cur, self.next]
    }
}
