//! Synthetic bridge transition overlay.
//!
//! Connectivity of a workflow net is judged against the cycle obtained by adding one
//! transition that leads from the unique sink place back to the unique source place.
//! [`BridgedGraph`] provides that cycle as a view: it wraps any graph, answers adjacency
//! queries for one extra node and leaves the wrapped graph, and therefore the net,
//! untouched. Dropping the overlay is all the cleanup there is.

use crate::utils::graph::{GraphBase, NodeId, Predecessors, RootedGraph, Successors};

/// A graph extended by one bridge node with the arcs `sink -> bridge -> source`.
///
/// The bridge node gets the first index past the wrapped graph's nodes and is the
/// [`RootedGraph::entry`] of the overlay.
///
/// # Examples
///
/// ```rust
/// use wfnet::analysis::BridgedGraph;
/// use wfnet::utils::graph::{DirectedGraph, GraphBase, Predecessors, RootedGraph, Successors};
///
/// // p0 -> t1 -> p2
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let p0 = graph.add_node("p0");
/// let t1 = graph.add_node("t1");
/// let p2 = graph.add_node("p2");
/// graph.add_edge(p0, t1, ())?;
/// graph.add_edge(t1, p2, ())?;
///
/// let bridged = BridgedGraph::new(&graph, p0, p2);
/// let bridge = bridged.entry();
///
/// assert_eq!(bridged.node_count(), 4);
/// assert_eq!(bridged.successors(bridge).collect::<Vec<_>>(), vec![p0]);
/// assert_eq!(bridged.predecessors(bridge).collect::<Vec<_>>(), vec![p2]);
/// assert_eq!(graph.node_count(), 3);
/// # Ok::<(), wfnet::Error>(())
/// ```
#[derive(Debug)]
pub struct BridgedGraph<'g, G> {
    inner: &'g G,
    source: NodeId,
    sink: NodeId,
    bridge: NodeId,
}

impl<'g, G: GraphBase> BridgedGraph<'g, G> {
    /// Wraps `inner`, bridging `sink` back to `source`.
    pub fn new(inner: &'g G, source: NodeId, sink: NodeId) -> Self {
        BridgedGraph {
            inner,
            source,
            sink,
            bridge: NodeId::new(inner.node_count()),
        }
    }

    /// The synthetic bridge node.
    #[must_use]
    pub fn bridge(&self) -> NodeId {
        self.bridge
    }

    /// The node the bridge leads to.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The node the bridge starts from.
    #[must_use]
    pub fn sink(&self) -> NodeId {
        self.sink
    }

    /// The wrapped graph.
    #[must_use]
    pub fn inner(&self) -> &'g G {
        self.inner
    }
}

impl<G: GraphBase> GraphBase for BridgedGraph<'_, G> {
    fn node_count(&self) -> usize {
        self.inner.node_count() + 1
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..=self.bridge.index()).map(NodeId::new)
    }
}

impl<G: Successors> Successors for BridgedGraph<'_, G> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        let (original, synthetic) = if node == self.bridge {
            (None, Some(self.source))
        } else {
            (
                Some(self.inner.successors(node)),
                (node == self.sink).then_some(self.bridge),
            )
        };
        original.into_iter().flatten().chain(synthetic)
    }
}

impl<G: Predecessors> Predecessors for BridgedGraph<'_, G> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        let (original, synthetic) = if node == self.bridge {
            (None, Some(self.sink))
        } else {
            (
                Some(self.inner.predecessors(node)),
                (node == self.source).then_some(self.bridge),
            )
        };
        original.into_iter().flatten().chain(synthetic)
    }
}

impl<G: Successors + Predecessors> RootedGraph for BridgedGraph<'_, G> {
    fn entry(&self) -> NodeId {
        self.bridge
    }
}
