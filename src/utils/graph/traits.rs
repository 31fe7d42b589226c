//! Trait definitions for graph abstractions.
//!
//! The analyses are written against these traits rather than a concrete graph type.
//! That is what lets the connectivity analysis run the same route calculation over the
//! plain net graph and over the bridged overlay that adds the synthetic transition,
//! without ever copying or mutating the net.
//!
//! - [`GraphBase`] - Node count and node iteration
//! - [`Successors`] - Outgoing adjacency
//! - [`Predecessors`] - Incoming adjacency
//! - [`RootedGraph`] - Graphs with a designated reference node

use crate::utils::graph::NodeId;

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers in the graph, by ascending index.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor nodes of the given node.
    ///
    /// For a directed edge `(u, v)`, node `v` is a successor of `u`. Parallel edges
    /// yield the same successor more than once; callers that need set semantics
    /// deduplicate.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the predecessor nodes of the given node.
    ///
    /// For a directed edge `(u, v)`, node `u` is a predecessor of `v`.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs with a designated reference node.
///
/// For the bridged workflow graph the reference node is the synthetic transition that
/// closes the net into a cycle: a node is connected to the whole net exactly when it is
/// connected to the reference node.
pub trait RootedGraph: Successors + Predecessors {
    /// Returns the reference node of the graph.
    fn entry(&self) -> NodeId;
}
