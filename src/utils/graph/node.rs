//! Node identifier for the analysis graphs.
//!
//! Every place and transition of a net, and the synthetic bridge transition used by
//! the connectivity analysis, is addressed through a [`NodeId`] while an analysis runs.
//! Node identifiers are dense indices, so per-node state can live in plain vectors.

use std::fmt;

/// A strongly-typed identifier for a node of a directed graph.
///
/// `NodeId` wraps a `usize` index. For graphs built from a [`crate::net::Net`] the index
/// equals the position of the element in [`crate::net::Net::elements`], which makes
/// mapping analysis results back to net elements a constant-time lookup.
///
/// # Examples
///
/// ```rust
/// use wfnet::utils::graph::{DirectedGraph, NodeId};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let p1 = graph.add_node("p1");
/// let t1 = graph.add_node("t1");
///
/// assert_eq!(p1, NodeId::new(0));
/// assert_ne!(p1, t1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// Normal usage obtains `NodeId` values from
    /// [`DirectedGraph::add_node`](crate::utils::graph::DirectedGraph::add_node) or from the
    /// analysis accessor. Constructing them by hand is mostly useful in tests.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index value of this node identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
