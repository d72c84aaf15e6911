//! Random-but-stable travel friction for co-located planets.
//!
//! Planets sharing a grid square are zero chart distance apart, yet
//! in-system travel still takes time. We substitute a fraction in the
//! `[0.2, 0.8)` range derived from a process-global random seed and the
//! canonically ordered pair of names: the same two planets always yield the
//! same value within a run, while different runs may sample differently.
//! Deriving the value instead of memoizing it leaves nothing to lock when
//! callers run concurrently.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash, Hasher};

use once_cell::sync::Lazy;

static PAIR_SEED: Lazy<RandomState> = Lazy::new(RandomState::new);

/// Friction fraction for a pair of co-located planets. Pair order does not
/// matter.
pub fn same_grid_fraction(a: &str, b: &str) -> f64 {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = PAIR_SEED.build_hasher();
    low.hash(&mut hasher);
    high.hash(&mut hasher);
    let unit = hasher.finish() as f64 / (u64::MAX as f64 + 1.0);
    0.2 + unit * 0.6
}
