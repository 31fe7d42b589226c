//! Adjacency-list directed graph.
//!
//! [`DirectedGraph`] stores node data and edges with outgoing and incoming adjacency
//! lists, so both arc directions of a net can be followed in constant time per edge.
//! Node storage is a [`Cow`] slice: the analysis accessor borrows the element slice of a
//! [`crate::net::Net`] instead of cloning it, and owned graphs are available for tests
//! and benchmarks.

use std::borrow::Cow;

use crate::{
    utils::graph::{
        edge::EdgeId,
        node::NodeId,
        traits::{GraphBase, Predecessors, Successors},
    },
    Error, Result,
};

/// Endpoints and payload of one edge.
#[derive(Debug, Clone)]
struct EdgeData<E> {
    source: NodeId,
    target: NodeId,
    data: E,
}

/// A directed multigraph with typed node and edge data.
///
/// - Nodes are addressed by [`NodeId`] (dense, in insertion order)
/// - Edges are addressed by [`EdgeId`]; parallel edges are allowed
/// - Forward ([`Successors`]) and backward ([`Predecessors`]) traversal are both O(degree)
///
/// # Lifetime Parameter
///
/// - `DirectedGraph<'static, N, E>` owns its nodes (built with [`DirectedGraph::new`])
/// - `DirectedGraph<'a, N, E>` borrows its nodes (built with [`DirectedGraph::from_nodes_borrowed`])
///
/// # Examples
///
/// ```rust
/// use wfnet::utils::graph::{DirectedGraph, Predecessors, Successors};
///
/// // p1 -> t1 -> p2
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let p1 = graph.add_node("p1");
/// let t1 = graph.add_node("t1");
/// let p2 = graph.add_node("p2");
/// graph.add_edge(p1, t1, ())?;
/// graph.add_edge(t1, p2, ())?;
///
/// assert_eq!(graph.successors(t1).collect::<Vec<_>>(), vec![p2]);
/// assert_eq!(graph.predecessors(t1).collect::<Vec<_>>(), vec![p1]);
/// # Ok::<(), wfnet::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<'a, N: Clone, E> {
    /// Node data storage (borrowed or owned)
    nodes: Cow<'a, [N]>,
    /// Edge data storage
    edges: Vec<EdgeData<E>>,
    /// Outgoing edges per node
    outgoing: Vec<Vec<EdgeId>>,
    /// Incoming edges per node
    incoming: Vec<Vec<EdgeId>>,
}

impl<N: Clone, E> Default for DirectedGraph<'static, N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone, E> DirectedGraph<'static, N, E> {
    /// Creates a new empty directed graph with owned storage.
    #[must_use]
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Cow::Owned(Vec::new()),
            edges: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Adds a new node with the given data and returns its sequential `NodeId`.
    pub fn add_node(&mut self, data: N) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.to_mut().push(data);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        id
    }
}

impl<'a, N: Clone, E> DirectedGraph<'a, N, E> {
    /// Creates a new directed graph borrowing its nodes from an external slice.
    ///
    /// Node `i` of the graph is `nodes[i]`. The graph starts without edges.
    #[must_use]
    pub fn from_nodes_borrowed(nodes: &'a [N]) -> Self {
        let node_count = nodes.len();
        DirectedGraph {
            nodes: Cow::Borrowed(nodes),
            edges: Vec::new(),
            outgoing: vec![Vec::new(); node_count],
            incoming: vec![Vec::new(); node_count],
        }
    }

    /// Returns the data associated with the given node, or `None` if it does not exist.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&N> {
        self.nodes.get(node.index())
    }

    /// Returns an iterator over all nodes with their identifiers.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &N)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, data)| (NodeId::new(i), data))
    }

    /// Returns `true` if the node exists in this graph.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.nodes.len()
    }

    /// Returns `true` if the graph contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a directed edge from `source` to `target` with the given data.
    ///
    /// Multiple edges between the same pair of nodes are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if either endpoint does not exist in the graph.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, data: E) -> Result<EdgeId> {
        for (role, node) in [("source", source), ("target", target)] {
            if !self.contains_node(node) {
                return Err(Error::GraphError(format!(
                    "{} node {} does not exist in graph with {} nodes",
                    role,
                    node,
                    self.nodes.len()
                )));
            }
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(EdgeData {
            source,
            target,
            data,
        });

        self.outgoing[source.index()].push(id);
        self.incoming[target.index()].push(id);

        Ok(id)
    }

    /// Returns the data associated with the given edge, or `None` if it does not exist.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&E> {
        self.edges.get(edge.index()).map(|e| &e.data)
    }

    /// Returns the `(source, target)` pair of the given edge.
    #[must_use]
    pub fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edges.get(edge.index()).map(|e| (e.source, e.target))
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the first edge from `source` to `target`, if any.
    #[must_use]
    pub fn find_edge(&self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        self.outgoing
            .get(source.index())?
            .iter()
            .copied()
            .find(|&edge| matches!(self.edge_endpoints(edge), Some((_, to)) if to == target))
    }
}

impl<N: Clone, E> GraphBase for DirectedGraph<'_, N, E> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }
}

impl<N: Clone, E> Successors for DirectedGraph<'_, N, E> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.outgoing[node.index()]
            .iter()
            .map(|&edge_id| self.edges[edge_id.index()].target)
    }
}

impl<N: Clone, E> Predecessors for DirectedGraph<'_, N, E> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.incoming[node.index()]
            .iter()
            .map(|&edge_id| self.edges[edge_id.index()].source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// p1 -> t1 -> p2, p1 -> t2 -> p2
    fn create_choice_graph() -> DirectedGraph<'static, &'static str, &'static str> {
        let mut graph = DirectedGraph::new();
        let p1 = graph.add_node("p1");
        let t1 = graph.add_node("t1");
        let t2 = graph.add_node("t2");
        let p2 = graph.add_node("p2");
        graph.add_edge(p1, t1, "a1").unwrap();
        graph.add_edge(p1, t2, "a2").unwrap();
        graph.add_edge(t1, p2, "a3").unwrap();
        graph.add_edge(t2, p2, "a4").unwrap();
        graph
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph: DirectedGraph<(), ()> = DirectedGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_node_assigns_sequential_ids() {
        let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
        assert_eq!(graph.add_node("p1"), NodeId::new(0));
        assert_eq!(graph.add_node("t1"), NodeId::new(1));
        assert_eq!(graph.node(NodeId::new(1)), Some(&"t1"));
        assert_eq!(graph.node(NodeId::new(9)), None);
    }

    #[test]
    fn test_edges_and_endpoints() {
        let graph = create_choice_graph();
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.edge(EdgeId::new(2)), Some(&"a3"));
        assert_eq!(
            graph.edge_endpoints(EdgeId::new(1)),
            Some((NodeId::new(0), NodeId::new(2)))
        );
        assert_eq!(graph.edge_endpoints(EdgeId::new(7)), None);
    }

    #[test]
    fn test_adjacency_both_directions() {
        let graph = create_choice_graph();
        let p1 = NodeId::new(0);
        let p2 = NodeId::new(3);

        let succ: Vec<NodeId> = graph.successors(p1).collect();
        assert_eq!(succ, vec![NodeId::new(1), NodeId::new(2)]);

        let pred: Vec<NodeId> = graph.predecessors(p2).collect();
        assert_eq!(pred, vec![NodeId::new(1), NodeId::new(2)]);

        assert_eq!(graph.find_edge(p1, NodeId::new(2)), Some(EdgeId::new(1)));
        assert_eq!(graph.find_edge(p2, p1), None);
    }

    #[test]
    fn test_add_edge_rejects_unknown_nodes() {
        let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
        let p1 = graph.add_node("p1");

        let err = graph.add_edge(p1, NodeId::new(5), ()).unwrap_err();
        assert!(matches!(err, Error::GraphError(msg) if msg.contains("target node n5")));

        let err = graph.add_edge(NodeId::new(3), p1, ()).unwrap_err();
        assert!(matches!(err, Error::GraphError(msg) if msg.contains("source node n3")));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_borrowed_nodes() {
        let names = vec!["p1", "t1"];
        let mut graph: DirectedGraph<&str, ()> = DirectedGraph::from_nodes_borrowed(&names);
        assert_eq!(graph.node_count(), 2);
        graph.add_edge(NodeId::new(0), NodeId::new(1), ()).unwrap();

        let nodes: Vec<(NodeId, &&str)> = graph.nodes().collect();
        assert_eq!(nodes, vec![(NodeId::new(0), &"p1"), (NodeId::new(1), &"t1")]);
        assert_eq!(graph.node_ids().count(), 2);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let first = graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(a, b, ()).unwrap();

        assert_eq!(graph.successors(a).count(), 2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.find_edge(a, b), Some(first));
        assert_eq!(graph.find_edge(b, a), None);
    }
}
