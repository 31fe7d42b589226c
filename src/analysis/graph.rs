//! Graph view of a net.
//!
//! [`NetGraph`] is the accessor every analysis goes through. It borrows the elements
//! of a [`Net`] as the node storage of a [`DirectedGraph`], so node `i` of the graph is
//! element `i` of the net, and turns every arc into an edge. Arcs that reference
//! elements the net does not contain are reported and skipped; everything after
//! construction is a pure read.

use std::{cell::Cell, collections::BTreeSet};

use crate::{
    net::{
        Diagnostic, DiagnosticCategory, DiagnosticSeverity, Diagnostics, Net, NetElement,
        NodeKind,
    },
    utils::graph::{
        algorithms::{connected_nodes, Direction},
        DirectedGraph, GraphBase, NodeId, Predecessors, Successors,
    },
    Result,
};

/// Number of distinct neighbours of a node in each direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArcConfiguration {
    /// Distinct predecessors
    pub incoming: usize,
    /// Distinct successors
    pub outgoing: usize,
}

impl ArcConfiguration {
    /// No incoming arcs.
    #[must_use]
    pub fn is_source(&self) -> bool {
        self.incoming == 0
    }

    /// No outgoing arcs.
    #[must_use]
    pub fn is_sink(&self) -> bool {
        self.outgoing == 0
    }

    /// No arcs at all.
    #[must_use]
    pub fn is_isolated(&self) -> bool {
        self.is_source() && self.is_sink()
    }
}

/// Read-only graph view of a [`Net`].
///
/// # Examples
///
/// ```rust
/// use wfnet::analysis::NetGraph;
/// use wfnet::net::{Diagnostics, ElementSpec, Net};
/// use wfnet::utils::graph::algorithms::Direction;
///
/// let mut net = Net::new();
/// net.create_element(ElementSpec::place("p1"))?;
/// net.create_element(ElementSpec::transition("t1"))?;
/// net.create_arc("p1", "t1")?;
///
/// let graph = NetGraph::new(&net, &Diagnostics::new())?;
/// let p1 = graph.node_of("p1").unwrap();
/// let t1 = graph.node_of("t1").unwrap();
///
/// assert!(graph.connected_nodes(p1, Direction::OUTBOUND).contains(&t1));
/// assert!(graph.arc_configuration(p1).is_source());
/// # Ok::<(), wfnet::Error>(())
/// ```
#[derive(Debug)]
pub struct NetGraph<'a> {
    net: &'a Net,
    graph: DirectedGraph<'a, NetElement, usize>,
    skipped_arcs: usize,
    queries: Cell<usize>,
}

impl<'a> NetGraph<'a> {
    /// Builds the graph view, skipping dangling arcs.
    ///
    /// # Errors
    ///
    /// Only propagates graph construction errors, which cannot occur for arcs whose
    /// endpoints were resolved.
    pub fn new(net: &'a Net, diagnostics: &Diagnostics) -> Result<Self> {
        Self::build(net, diagnostics, false)
    }

    /// Builds the graph view.
    ///
    /// An arc whose source or target is not an element of the net is malformed. In
    /// lenient mode it is reported as a warning and left out of the graph; in strict
    /// mode the build fails. Arcs between two places or two transitions are kept and
    /// reported (strict mode rejects them). A second arc between the same pair of
    /// elements is kept and noted as info, naming the arc it repeats.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Malformed`] in strict mode for the first malformed arc.
    pub fn build(net: &'a Net, diagnostics: &Diagnostics, strict: bool) -> Result<Self> {
        let mut graph = DirectedGraph::from_nodes_borrowed(net.elements());
        let mut skipped_arcs = 0;

        for (position, arc) in net.arcs().iter().enumerate() {
            let (Some(source), Some(target)) =
                (net.position_of(&arc.source), net.position_of(&arc.target))
            else {
                let missing = if net.position_of(&arc.source).is_none() {
                    &arc.source
                } else {
                    &arc.target
                };
                if strict {
                    return Err(malformed_error!(
                        "arc {} references unknown element {}",
                        arc.id,
                        missing
                    ));
                }

                let message = format!("arc {} references unknown element {missing}, skipped", arc.id);
                log::warn!("{message}");
                diagnostics.push(
                    Diagnostic::new(DiagnosticSeverity::Warning, DiagnosticCategory::Arc, message)
                        .with_element(arc.id.as_str()),
                );
                skipped_arcs += 1;
                continue;
            };

            let elements = net.elements();
            if elements[source].node_kind() == elements[target].node_kind() {
                if strict {
                    return Err(malformed_error!(
                        "arc {} connects two elements of the same kind",
                        arc.id
                    ));
                }
                let message = format!(
                    "arc {} connects {} and {}, both of the same kind",
                    arc.id, arc.source, arc.target
                );
                log::warn!("{message}");
                diagnostics.push(
                    Diagnostic::new(DiagnosticSeverity::Warning, DiagnosticCategory::Arc, message)
                        .with_element(arc.id.as_str()),
                );
            }

            let (from, to) = (NodeId::new(source), NodeId::new(target));
            if let Some(earlier) = graph
                .find_edge(from, to)
                .and_then(|edge| graph.edge(edge))
                .and_then(|&position: &usize| net.arcs().get(position))
            {
                let message = format!(
                    "arc {} duplicates arc {} from {} to {}",
                    arc.id,
                    earlier.id,
                    arc.source,
                    arc.target
                );
                log::debug!("{message}");
                diagnostics.push(
                    Diagnostic::new(DiagnosticSeverity::Info, DiagnosticCategory::Arc, message)
                        .with_element(arc.id.as_str()),
                );
            }

            graph.add_edge(from, to, position)?;
        }

        log::debug!(
            "net graph built: {} nodes, {} edges, {} arcs skipped",
            graph.node_count(),
            graph.edge_count(),
            skipped_arcs
        );

        Ok(NetGraph {
            net,
            graph,
            skipped_arcs,
            queries: Cell::new(0),
        })
    }

    /// The underlying net.
    #[must_use]
    pub fn net(&self) -> &'a Net {
        self.net
    }

    /// Resolves a node to its element.
    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&'a NetElement> {
        self.net.elements().get(node.index())
    }

    /// Resolves an element identifier to its node.
    #[must_use]
    pub fn node_of(&self, id: &str) -> Option<NodeId> {
        self.net.position_of(id).map(NodeId::new)
    }

    /// Structural kind of a node.
    #[must_use]
    pub fn node_kind(&self, node: NodeId) -> Option<NodeKind> {
        self.element(node).map(NetElement::node_kind)
    }

    /// All place nodes in element order.
    pub fn places(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes_of_kind(NodeKind::Place)
    }

    /// All transition nodes (simple and operator) in element order.
    pub fn transitions(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes_of_kind(NodeKind::Transition)
    }

    fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = NodeId> + '_ {
        self.graph
            .nodes()
            .filter(move |(_, element)| element.node_kind() == kind)
            .map(|(id, _)| id)
    }

    /// Returns the set of neighbours of `node` in the requested direction.
    ///
    /// Parallel arcs count once. Debug builds assert that `node` belongs to this graph;
    /// release builds return an empty set for foreign nodes.
    pub fn connected_nodes(&self, node: NodeId, direction: Direction) -> BTreeSet<NodeId> {
        debug_assert!(
            self.graph.contains_node(node),
            "node {node} is not part of the net graph"
        );
        connected_nodes(self, node, direction)
    }

    /// Distinct incoming and outgoing neighbour counts of `node`.
    pub fn arc_configuration(&self, node: NodeId) -> ArcConfiguration {
        ArcConfiguration {
            incoming: self.connected_nodes(node, Direction::INBOUND).len(),
            outgoing: self.connected_nodes(node, Direction::OUTBOUND).len(),
        }
    }

    /// Number of arcs in the net, including skipped ones.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.net.arc_count()
    }

    /// Number of arcs that made it into the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of dangling arcs left out of the graph.
    #[must_use]
    pub fn skipped_arcs(&self) -> usize {
        self.skipped_arcs
    }

    /// Number of adjacency queries answered so far.
    ///
    /// Every call to [`Successors::successors`] or [`Predecessors::predecessors`] counts
    /// once, so repeated analyses over a cached result leave it unchanged.
    #[must_use]
    pub fn query_count(&self) -> usize {
        self.queries.get()
    }

    fn record_query(&self) {
        self.queries.set(self.queries.get() + 1);
    }
}

impl GraphBase for NetGraph<'_> {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.graph.node_ids()
    }
}

impl Successors for NetGraph<'_> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.record_query();
        self.graph.successors(node)
    }
}

impl Predecessors for NetGraph<'_> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.record_query();
        self.graph.predecessors(node)
    }
}
