//! Direction-filtered neighbourhood queries.
//!
//! All analyses navigate the graph through [`connected_nodes`]. It returns a set, so
//! parallel arcs collapse into a single neighbour and arc multiplicity never leaks into
//! the structural checks.

use std::collections::BTreeSet;

use bitflags::bitflags;

use crate::utils::graph::{NodeId, Predecessors, Successors};

bitflags! {
    /// Arc directions to follow when collecting the neighbours of a node.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Direction: u8 {
        /// Follow arcs that end at the node (yields predecessors)
        const INBOUND = 0b01;
        /// Follow arcs that start at the node (yields successors)
        const OUTBOUND = 0b10;
        /// Follow arcs in both directions
        const BOTH = Self::INBOUND.bits() | Self::OUTBOUND.bits();
    }
}

impl Direction {
    /// Returns the direction with inbound and outbound exchanged.
    ///
    /// `BOTH` and the empty set map to themselves.
    #[must_use]
    pub fn reversed(self) -> Self {
        let mut reversed = Direction::empty();
        if self.contains(Direction::INBOUND) {
            reversed |= Direction::OUTBOUND;
        }
        if self.contains(Direction::OUTBOUND) {
            reversed |= Direction::INBOUND;
        }
        reversed
    }
}

/// Returns the set of nodes directly connected to `node` in the requested direction.
///
/// Nodes outside the graph have no neighbours; the query returns an empty set instead
/// of panicking.
///
/// # Examples
///
/// ```rust
/// use wfnet::utils::graph::{DirectedGraph, algorithms::{connected_nodes, Direction}};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let p1 = graph.add_node("p1");
/// let t1 = graph.add_node("t1");
/// let p2 = graph.add_node("p2");
/// graph.add_edge(p1, t1, ())?;
/// graph.add_edge(t1, p2, ())?;
///
/// assert_eq!(connected_nodes(&graph, t1, Direction::INBOUND).len(), 1);
/// assert_eq!(connected_nodes(&graph, t1, Direction::BOTH).len(), 2);
/// # Ok::<(), wfnet::Error>(())
/// ```
pub fn connected_nodes<G>(graph: &G, node: NodeId, direction: Direction) -> BTreeSet<NodeId>
where
    G: Successors + Predecessors,
{
    let mut result = BTreeSet::new();
    if node.index() >= graph.node_count() {
        return result;
    }

    if direction.contains(Direction::INBOUND) {
        result.extend(graph.predecessors(node));
    }
    if direction.contains(Direction::OUTBOUND) {
        result.extend(graph.successors(node));
    }
    result
}
