use crate::error::{Error, Result};

pub type NodeId = usize;
pub type Weight = u32;
pub type Distance = u64;

/// Distance of a node no path has reached yet. Finite so that
/// `INFINITY + Weight::MAX` still fits in a `Distance`.
pub const INFINITY: Distance = Distance::MAX / 2;

/// Largest capacity a graph can be built with. The matrix holds
/// `(capacity + 1)^2` weights, about 1 GiB at this bound.
pub const MAX_CAPACITY: usize = 1 << 14;

/// Directed graph over 1-based node ids stored as a dense weight matrix.
///
/// A weight of 0 means "no edge". The matrix is `(capacity + 1)` square so
/// that every id in `0..=capacity` can be addressed; id 0 is accepted but the
/// search never visits it.
#[derive(Clone, Debug)]
pub struct Graph {
    capacity: usize,
    node_count: Option<NodeId>,
    edge_count: usize,
    weights: Vec<Weight>,
}

impl Graph {
    /// Panics if the matrix cannot be allocated; use [`Graph::try_new`] for
    /// capacities read from input.
    pub fn new(capacity: usize) -> Self {
        let side = capacity + 1;
        Self {
            capacity,
            node_count: None,
            edge_count: 0,
            weights: vec![0; side * side],
        }
    }

    /// Fails with `CapacityTooLarge` above [`MAX_CAPACITY`] or when the
    /// matrix cannot be allocated.
    pub fn try_new(capacity: usize) -> Result<Self> {
        let too_large = || Error::CapacityTooLarge {
            capacity,
            max: MAX_CAPACITY,
        };
        if capacity > MAX_CAPACITY {
            return Err(too_large());
        }
        let cells = capacity
            .checked_add(1)
            .and_then(|side| side.checked_mul(side))
            .ok_or_else(too_large)?;
        let mut weights = Vec::new();
        weights.try_reserve_exact(cells).map_err(|_| too_large())?;
        weights.resize(cells, 0);
        Ok(Self {
            capacity,
            node_count: None,
            edge_count: 0,
            weights,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Highest node id seen in any edge, `None` until the first edge is set.
    pub fn node_count(&self) -> Option<NodeId> {
        self.node_count
    }

    /// Number of distinct directed edges stored.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Stores the directed edge `u -> v`, overwriting any previous weight.
    pub fn set_edge(&mut self, u: NodeId, v: NodeId, weight: Weight) -> Result<()> {
        if u > self.capacity || v > self.capacity || weight == 0 {
            return Err(Error::invalid_edge(
                u as i64,
                v as i64,
                weight as i64,
                self.capacity,
            ));
        }
        let idx = self.index(u, v);
        if self.weights[idx] == 0 {
            self.edge_count += 1;
        }
        self.weights[idx] = weight;
        let highest = u.max(v);
        self.node_count = Some(self.node_count.map_or(highest, |n| n.max(highest)));
        Ok(())
    }

    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<Weight> {
        if u > self.capacity || v > self.capacity {
            return None;
        }
        match self.weights[self.index(u, v)] {
            0 => None,
            w => Some(w),
        }
    }

    /// Row `u` of the matrix: `row(u)[v]` is the weight of `u -> v`, 0 if absent.
    pub(crate) fn row(&self, u: NodeId) -> &[Weight] {
        let side = self.capacity + 1;
        &self.weights[u * side..(u + 1) * side]
    }

    /// Stored edges as `(u, v, weight)`, ascending by `u` then `v`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        let side = self.capacity + 1;
        self.weights
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0)
            .map(move |(idx, &w)| (idx / side, idx % side, w))
    }

    fn index(&self, u: NodeId, v: NodeId) -> usize {
        u * (self.capacity + 1) + v
    }
}
