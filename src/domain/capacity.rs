//! Capacity policies deciding how many children an n-ary node may hold.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default fan-out cap of the n-ary root.
pub const DEFAULT_MAX_ROOT_CHILDREN: usize = 6;
/// Default upper bound of the per-check draw for non-root nodes.
pub const DEFAULT_MAX_OTHER_NODE_CHILDREN: usize = 4;

/// Asked once per visited node during an n-ary insertion.
///
/// The answer is not remembered: the same node may be judged full on one
/// insertion and open on the next.
pub trait CapacityPolicy {
    fn capacity(&mut self, is_root: bool) -> usize;
}

impl<F> CapacityPolicy for F
where
    F: FnMut(bool) -> usize,
{
    fn capacity(&mut self, is_root: bool) -> usize {
        self(is_root)
    }
}

/// Root gets a fixed cap, every other node a fresh uniform draw in
/// `[0, max_other_node_children]`.
#[derive(Debug, Clone)]
pub struct RandomCapacity {
    max_root_children: usize,
    max_other_node_children: usize,
    rng: StdRng,
}

impl RandomCapacity {
    pub fn seeded(max_root_children: usize, max_other_node_children: usize, seed: u64) -> Self {
        Self {
            max_root_children,
            max_other_node_children,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy(max_root_children: usize, max_other_node_children: usize) -> Self {
        Self {
            max_root_children,
            max_other_node_children,
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is given, entropy-backed otherwise.
    pub fn new(max_root_children: usize, max_other_node_children: usize, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(max_root_children, max_other_node_children, seed),
            None => Self::from_entropy(max_root_children, max_other_node_children),
        }
    }
}

impl Default for RandomCapacity {
    fn default() -> Self {
        Self::from_entropy(DEFAULT_MAX_ROOT_CHILDREN, DEFAULT_MAX_OTHER_NODE_CHILDREN)
    }
}

impl CapacityPolicy for RandomCapacity {
    fn capacity(&mut self, is_root: bool) -> usize {
        if is_root {
            self.max_root_children
        } else {
            self.rng.gen_range(0..=self.max_other_node_children)
        }
    }
}

/// Deterministic caps, mostly for tests and reproducible demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCapacity {
    pub root: usize,
    pub other: usize,
}

impl FixedCapacity {
    pub fn new(root: usize, other: usize) -> Self {
        Self { root, other }
    }
}

impl CapacityPolicy for FixedCapacity {
    fn capacity(&mut self, is_root: bool) -> usize {
        if is_root {
            self.root
        } else {
            self.other
        }
    }
}
