//! Edge identifier for the analysis graphs.
//!
//! Edges of a graph built from a net correspond to resolved arcs. Arcs whose endpoints
//! could not be resolved never become edges.

use std::fmt;

/// A strongly-typed identifier for an edge of a directed graph.
///
/// Edge IDs are assigned sequentially starting from 0 when edges are added to a graph.
/// They are distinct from [`NodeId`](crate::utils::graph::NodeId) at the type level, so
/// node and edge indices cannot be mixed up.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw index value.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw index value of this edge identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
