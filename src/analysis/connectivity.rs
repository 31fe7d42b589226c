//! Weak and strong connectivity of a workflow net.
//!
//! A workflow net is judged against the cycle closed by a synthetic bridge transition
//! from its unique sink place back to its unique source place. On that cycle, a node is
//! connected to the whole net exactly when it is connected to the bridge, so a single
//! row and a single column of the route tables answer the question for every node:
//!
//! - **weakly connected**: a route to and from the bridge exists when arcs may be
//!   followed in either direction
//! - **strongly connected**: a directed route to and from the bridge exists
//!
//! Every node that is not weakly connected is also not strongly connected.
//!
//! # Anchoring
//!
//! Source and sink places are counted among the *connected* places only, meaning places
//! with at least one arc. An isolated place has no route to anything; it is reported as
//! disconnected instead of blocking the check. With no connected source place, or more
//! than one, the result is [`Connectivity::Inconclusive`], never an empty report.

use std::{collections::BTreeSet, fmt};

use crate::{
    analysis::BridgedGraph,
    net::{DiagnosticCategory, Diagnostics},
    utils::graph::{
        algorithms::{all_pairs_routes, connected_nodes, Direction},
        NodeId, Predecessors, RootedGraph, Successors,
    },
};

/// Why no connectivity verdict could be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inconclusive {
    /// The number of connected source places is not exactly one
    SourcePlaces(usize),
    /// The number of connected sink places is not exactly one
    SinkPlaces(usize),
    /// The route calculation did not produce a table
    RoutesUnavailable,
    /// The check is disabled in the configuration
    Disabled,
}

impl fmt::Display for Inconclusive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inconclusive::SourcePlaces(n) => {
                write!(f, "expected exactly one source place, found {n}")
            }
            Inconclusive::SinkPlaces(n) => write!(f, "expected exactly one sink place, found {n}"),
            Inconclusive::RoutesUnavailable => write!(f, "route calculation unavailable"),
            Inconclusive::Disabled => write!(f, "connectivity check disabled"),
        }
    }
}

/// Nodes lacking a route to or from the bridge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectivityReport {
    /// Nodes without an undirected route to and from the bridge
    pub disconnected: BTreeSet<NodeId>,
    /// Nodes without a directed route to and from the bridge
    pub not_strongly_connected: BTreeSet<NodeId>,
}

impl ConnectivityReport {
    /// Returns true if every node is strongly connected.
    #[must_use]
    pub fn is_strongly_connected(&self) -> bool {
        self.not_strongly_connected.is_empty()
    }
}

/// Outcome of the connectivity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connectivity {
    /// The check ran; the report may still list defects.
    Analyzed(ConnectivityReport),
    /// The check could not be anchored or was not run.
    Inconclusive(Inconclusive),
}

impl Connectivity {
    /// The report, if the check reached a verdict.
    #[must_use]
    pub fn report(&self) -> Option<&ConnectivityReport> {
        match self {
            Connectivity::Analyzed(report) => Some(report),
            Connectivity::Inconclusive(_) => None,
        }
    }

    /// The reason, if the check did not reach a verdict.
    #[must_use]
    pub fn inconclusive(&self) -> Option<Inconclusive> {
        match self {
            Connectivity::Analyzed(_) => None,
            Connectivity::Inconclusive(reason) => Some(*reason),
        }
    }

    /// Returns true if a verdict was reached.
    #[must_use]
    pub fn is_conclusive(&self) -> bool {
        matches!(self, Connectivity::Analyzed(_))
    }
}

/// Splits off the source and sink places that have at least one arc.
fn anchor_places<G>(graph: &G, places: &[NodeId]) -> (Vec<NodeId>, Vec<NodeId>)
where
    G: Successors + Predecessors,
{
    let mut sources = Vec::new();
    let mut sinks = Vec::new();
    for &place in places {
        let incoming = connected_nodes(graph, place, Direction::INBOUND).len();
        let outgoing = connected_nodes(graph, place, Direction::OUTBOUND).len();
        if incoming == 0 && outgoing > 0 {
            sources.push(place);
        }
        if outgoing == 0 && incoming > 0 {
            sinks.push(place);
        }
    }
    (sources, sinks)
}

/// Computes weak and strong connectivity of the nodes `places` and `transitions`.
///
/// - no transitions: an empty report, the net has no backbone to connect to
/// - not exactly one connected source or sink place: inconclusive
/// - otherwise both route tables are computed over the nodes plus the bridge of a
///   [`BridgedGraph`], and every node missing a route to or from the bridge is listed
///
/// Inconclusive outcomes are also reported to `diagnostics`; `bridge_label` names the
/// synthetic transition there.
pub fn compute_connectivity<G>(
    graph: &G,
    places: &[NodeId],
    transitions: &[NodeId],
    bridge_label: &str,
    diagnostics: &Diagnostics,
) -> Connectivity
where
    G: Successors + Predecessors,
{
    if transitions.is_empty() {
        log::debug!("connectivity: net without transitions, nothing to check");
        return Connectivity::Analyzed(ConnectivityReport::default());
    }

    let (sources, sinks) = anchor_places(graph, places);
    let (source, sink) = match (sources.as_slice(), sinks.as_slice()) {
        (&[source], &[sink]) => (source, sink),
        (&[_], _) => {
            return inconclusive(
                Inconclusive::SinkPlaces(sinks.len()),
                bridge_label,
                diagnostics,
            )
        }
        _ => {
            return inconclusive(
                Inconclusive::SourcePlaces(sources.len()),
                bridge_label,
                diagnostics,
            )
        }
    };

    let bridged = BridgedGraph::new(graph, source, sink);
    let bridge = bridged.entry();

    let mut nodes = Vec::with_capacity(places.len() + transitions.len() + 1);
    nodes.extend_from_slice(places);
    nodes.extend_from_slice(transitions);
    nodes.push(bridge);

    let tables = all_pairs_routes(&bridged, &nodes, true)
        .and_then(|weak| Ok((weak, all_pairs_routes(&bridged, &nodes, false)?)));
    let (weak, strong) = match tables {
        Ok(tables) => tables,
        Err(error) => {
            diagnostics.warning(
                DiagnosticCategory::Route,
                format!("route calculation failed: {error}"),
            );
            return inconclusive(Inconclusive::RoutesUnavailable, bridge_label, diagnostics);
        }
    };

    let mut report = ConnectivityReport {
        disconnected: weak.unconnected_nodes(bridge),
        not_strongly_connected: strong.unconnected_nodes(bridge),
    };
    report.disconnected.remove(&bridge);
    report.not_strongly_connected.remove(&bridge);

    log::debug!(
        "connectivity: {} disconnected, {} not strongly connected of {} nodes",
        report.disconnected.len(),
        report.not_strongly_connected.len(),
        nodes.len() - 1
    );
    Connectivity::Analyzed(report)
}

fn inconclusive(reason: Inconclusive, bridge_label: &str, diagnostics: &Diagnostics) -> Connectivity {
    log::debug!("connectivity inconclusive: {reason}");
    diagnostics.info(
        DiagnosticCategory::Connectivity,
        format!("{reason}; transition {bridge_label} not inserted, connectivity not checked"),
    );
    Connectivity::Inconclusive(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::graph::DirectedGraph;

    struct Fixture {
        graph: DirectedGraph<'static, &'static str, ()>,
        places: Vec<NodeId>,
        transitions: Vec<NodeId>,
    }

    impl Fixture {
        fn new(places: &[&'static str], transitions: &[&'static str], arcs: &[(usize, usize)]) -> Self {
            let mut graph = DirectedGraph::new();
            let places: Vec<NodeId> = places.iter().map(|&p| graph.add_node(p)).collect();
            let transitions: Vec<NodeId> = transitions.iter().map(|&t| graph.add_node(t)).collect();
            for &(from, to) in arcs {
                graph.add_edge(NodeId::new(from), NodeId::new(to), ()).unwrap();
            }
            Fixture {
                graph,
                places,
                transitions,
            }
        }

        fn run(&self, diagnostics: &Diagnostics) -> Connectivity {
            compute_connectivity(&self.graph, &self.places, &self.transitions, "t*", diagnostics)
        }
    }

    #[test]
    fn test_without_transitions() {
        // p0, p1 isolated
        let fixture = Fixture::new(&["p0", "p1"], &[], &[]);
        let result = fixture.run(&Diagnostics::new());
        assert_eq!(result, Connectivity::Analyzed(ConnectivityReport::default()));
    }

    #[test]
    fn test_sound_chain() {
        // p0 -> t2 -> p1
        let fixture = Fixture::new(&["p0", "p1"], &["t2"], &[(0, 2), (2, 1)]);
        let diagnostics = Diagnostics::new();
        let report = fixture.run(&diagnostics).report().cloned().unwrap();
        assert!(report.disconnected.is_empty());
        assert!(report.is_strongly_connected());
        assert!(!diagnostics.has_any());
    }

    #[test]
    fn test_dead_end_branch_is_not_strongly_connected() {
        // p0 -> t3 -> p1, t3 -> p2 -> t4 (t4 has no output)
        let fixture = Fixture::new(&["p0", "p1", "p2"], &["t3", "t4"], &[(0, 3), (3, 1), (3, 2), (2, 4)]);
        let report = fixture.run(&Diagnostics::new()).report().cloned().unwrap();

        assert!(report.disconnected.is_empty());
        assert_eq!(
            report.not_strongly_connected,
            BTreeSet::from([NodeId::new(2), NodeId::new(4)])
        );
    }

    #[test]
    fn test_isolated_place_does_not_block_anchoring() {
        // p0 -> t3 -> p1, p2 isolated
        let fixture = Fixture::new(&["p0", "p1", "p2"], &["t3"], &[(0, 3), (3, 1)]);
        let report = fixture.run(&Diagnostics::new()).report().cloned().unwrap();

        assert_eq!(report.disconnected, BTreeSet::from([NodeId::new(2)]));
        assert_eq!(report.not_strongly_connected, BTreeSet::from([NodeId::new(2)]));
    }

    #[test]
    fn test_two_sources_are_inconclusive() {
        // p0 -> t3, p1 -> t3 -> p2
        let fixture = Fixture::new(&["p0", "p1", "p2"], &["t3"], &[(0, 3), (1, 3), (3, 2)]);
        let diagnostics = Diagnostics::new();
        let result = fixture.run(&diagnostics);

        assert_eq!(result, Connectivity::Inconclusive(Inconclusive::SourcePlaces(2)));
        assert!(!result.is_conclusive());
        assert_eq!(diagnostics.by_category(DiagnosticCategory::Connectivity).len(), 1);
    }

    #[test]
    fn test_two_sinks_are_inconclusive() {
        // p0 -> t3 -> p1, t3 -> p2
        let fixture = Fixture::new(&["p0", "p1", "p2"], &["t3"], &[(0, 3), (3, 1), (3, 2)]);
        let result = fixture.run(&Diagnostics::new());
        assert_eq!(result.inconclusive(), Some(Inconclusive::SinkPlaces(2)));
    }

    #[test]
    fn test_no_source_is_inconclusive() {
        // p0 -> t2 -> p1 -> t3 -> p0
        let fixture = Fixture::new(&["p0", "p1"], &["t2", "t3"], &[(0, 2), (2, 1), (1, 3), (3, 0)]);
        let result = fixture.run(&Diagnostics::new());
        assert_eq!(result.inconclusive(), Some(Inconclusive::SourcePlaces(0)));
    }

    #[test]
    fn test_unknown_node_makes_routes_unavailable() {
        let fixture = Fixture::new(&["p0", "p1"], &["t2"], &[(0, 2), (2, 1)]);
        let diagnostics = Diagnostics::new();
        let transitions = [NodeId::new(2), NodeId::new(40)];
        let result = compute_connectivity(&fixture.graph, &fixture.places, &transitions, "t*", &diagnostics);

        assert_eq!(result.inconclusive(), Some(Inconclusive::RoutesUnavailable));
        assert_eq!(diagnostics.by_category(DiagnosticCategory::Route).len(), 1);
    }
}
