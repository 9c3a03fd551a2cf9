//! Execution backends for the per-vertex kernels.
//!
//! Classification and ear validation are run as `parallel_for(n, |k| ...)`
//! over a list of slots. Results always come back in index order, so the
//! scheduler's choice of ear does not depend on which backend ran the round.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// "Run this per-element function over `0..n`" capability.
pub trait Backend: Sync {
    /// Evaluate `f(0), f(1), ..., f(n - 1)`; results are returned in index order.
    fn parallel_for<T, F>(&self, n: usize, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send;

    fn name(&self) -> &'static str;
}

/// Single-threaded loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct Serial;

impl Backend for Serial {
    #[inline]
    fn parallel_for<T, F>(&self, n: usize, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        (0..n).map(f).collect()
    }

    fn name(&self) -> &'static str {
        "serial"
    }
}

/// Rayon thread pool.
#[cfg(feature = "parallel")]
#[derive(Clone, Copy, Debug)]
pub struct Threaded {
    /// Smallest chunk handed to one worker.
    pub min_len: usize,
}

#[cfg(feature = "parallel")]
impl Default for Threaded {
    fn default() -> Self {
        Self { min_len: 64 }
    }
}

#[cfg(feature = "parallel")]
impl Backend for Threaded {
    fn parallel_for<T, F>(&self, n: usize, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        (0..n)
            .into_par_iter()
            .with_min_len(self.min_len.max(1))
            .map(f)
            .collect()
    }

    fn name(&self) -> &'static str {
        "threaded"
    }
}

#[cfg(feature = "parallel")]
pub type DefaultBackend = Threaded;
#[cfg(not(feature = "parallel"))]
pub type DefaultBackend = Serial;
