//! Cached structural analysis of one net.
//!
//! [`StructuralAnalysis`] answers every structural query about a [`Net`] and computes
//! each category of information at most once:
//!
//! | Category | Contents | Depends on |
//! |----------|----------|------------|
//! | basic info | places, transitions, source/sink places and transitions, arc count | - |
//! | connectivity | disconnected and not strongly connected nodes | basic info |
//! | free choice | violation groups | basic info |
//!
//! Categories are computed on first access. The analysis borrows the net, so the net
//! cannot change while results are cached; after editing the net, build a new analysis.

use std::{cell::OnceCell, sync::Arc};

use crate::{
    analysis::{
        compute_connectivity, free_choice_violations, union_violations, AnalysisConfig,
        Connectivity, Inconclusive, NetGraph, ViolationGroup,
    },
    net::{DiagnosticCategory, Diagnostics, Net, NetElement},
    utils::graph::NodeId,
    Result,
};

/// Element classification of a net.
///
/// Node lists follow the element order of the net.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicNetInfo {
    /// All places
    pub places: Vec<NodeId>,
    /// All transitions, simple and operator
    pub transitions: Vec<NodeId>,
    /// Places without incoming arcs
    pub source_places: Vec<NodeId>,
    /// Places without outgoing arcs
    pub sink_places: Vec<NodeId>,
    /// Transitions without incoming arcs
    pub source_transitions: Vec<NodeId>,
    /// Transitions without outgoing arcs
    pub sink_transitions: Vec<NodeId>,
    /// Number of arcs in the net
    pub arc_count: usize,
}

/// Lazily computed structural information about a net.
///
/// # Examples
///
/// ```rust
/// use wfnet::analysis::StructuralAnalysis;
/// use wfnet::net::{ElementSpec, Net};
///
/// let mut net = Net::new();
/// for place in ["p1", "p2"] {
///     net.create_element(ElementSpec::place(place))?;
/// }
/// net.create_element(ElementSpec::transition("t1"))?;
/// net.create_arc("p1", "t1")?;
/// net.create_arc("t1", "p2")?;
///
/// let analysis = StructuralAnalysis::new(&net)?;
/// assert_eq!(analysis.num_places(), 2);
/// assert_eq!(analysis.num_source_places(), 1);
/// assert_eq!(analysis.num_not_strongly_connected_nodes(), Some(0));
/// assert_eq!(analysis.num_free_choice_violations(), 0);
/// # Ok::<(), wfnet::Error>(())
/// ```
#[derive(Debug)]
pub struct StructuralAnalysis<'a> {
    graph: NetGraph<'a>,
    config: AnalysisConfig,
    diagnostics: Arc<Diagnostics>,
    basic: OnceCell<BasicNetInfo>,
    connectivity: OnceCell<Connectivity>,
    free_choice: OnceCell<Vec<ViolationGroup>>,
}

impl<'a> StructuralAnalysis<'a> {
    /// Creates an analysis with the default configuration and a private diagnostics sink.
    ///
    /// # Errors
    ///
    /// See [`StructuralAnalysis::with_config`].
    pub fn new(net: &'a Net) -> Result<Self> {
        Self::with_config(net, AnalysisConfig::default(), Arc::new(Diagnostics::new()))
    }

    /// Creates an analysis reporting to the given diagnostics sink.
    ///
    /// Nothing is computed yet apart from the graph view of the net.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Malformed`] if `config.strict` is set and the net has
    /// malformed arcs.
    pub fn with_config(
        net: &'a Net,
        config: AnalysisConfig,
        diagnostics: Arc<Diagnostics>,
    ) -> Result<Self> {
        let graph = NetGraph::build(net, &diagnostics, config.strict)?;
        Ok(StructuralAnalysis {
            graph,
            config,
            diagnostics,
            basic: OnceCell::new(),
            connectivity: OnceCell::new(),
            free_choice: OnceCell::new(),
        })
    }

    /// The analyzed net.
    #[must_use]
    pub fn net(&self) -> &'a Net {
        self.graph.net()
    }

    /// The graph view used by all checks.
    #[must_use]
    pub fn graph(&self) -> &NetGraph<'a> {
        &self.graph
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The diagnostics sink.
    #[must_use]
    pub fn diagnostics(&self) -> &Arc<Diagnostics> {
        &self.diagnostics
    }

    /// Resolves nodes to their elements.
    pub fn elements<'s>(&'s self, nodes: &'s [NodeId]) -> impl Iterator<Item = &'a NetElement> + 's {
        nodes.iter().filter_map(move |&node| self.graph.element(node))
    }

    /// Place and transition classification, computed on first access.
    pub fn basic_info(&self) -> &BasicNetInfo {
        self.basic.get_or_init(|| {
            let mut info = BasicNetInfo {
                arc_count: self.graph.arc_count(),
                ..BasicNetInfo::default()
            };

            for node in self.graph.places() {
                let arcs = self.graph.arc_configuration(node);
                info.places.push(node);
                if arcs.is_source() {
                    info.source_places.push(node);
                }
                if arcs.is_sink() {
                    info.sink_places.push(node);
                }
            }
            for node in self.graph.transitions() {
                let arcs = self.graph.arc_configuration(node);
                info.transitions.push(node);
                if arcs.is_source() {
                    info.source_transitions.push(node);
                }
                if arcs.is_sink() {
                    info.sink_transitions.push(node);
                }
            }

            log::debug!(
                "basic info: {} places, {} transitions, {} arcs",
                info.places.len(),
                info.transitions.len(),
                info.arc_count
            );
            info
        })
    }

    /// Number of places.
    pub fn num_places(&self) -> usize {
        self.basic_info().places.len()
    }

    /// All places.
    pub fn places(&self) -> impl Iterator<Item = &'a NetElement> + '_ {
        self.elements(&self.basic_info().places)
    }

    /// Number of transitions.
    pub fn num_transitions(&self) -> usize {
        self.basic_info().transitions.len()
    }

    /// All transitions.
    pub fn transitions(&self) -> impl Iterator<Item = &'a NetElement> + '_ {
        self.elements(&self.basic_info().transitions)
    }

    /// Number of arcs, including arcs the graph view skipped.
    pub fn num_arcs(&self) -> usize {
        self.basic_info().arc_count
    }

    /// Number of places without incoming arcs.
    pub fn num_source_places(&self) -> usize {
        self.basic_info().source_places.len()
    }

    /// Places without incoming arcs.
    pub fn source_places(&self) -> impl Iterator<Item = &'a NetElement> + '_ {
        self.elements(&self.basic_info().source_places)
    }

    /// Number of places without outgoing arcs.
    pub fn num_sink_places(&self) -> usize {
        self.basic_info().sink_places.len()
    }

    /// Places without outgoing arcs.
    pub fn sink_places(&self) -> impl Iterator<Item = &'a NetElement> + '_ {
        self.elements(&self.basic_info().sink_places)
    }

    /// Number of transitions without incoming arcs.
    pub fn num_source_transitions(&self) -> usize {
        self.basic_info().source_transitions.len()
    }

    /// Transitions without incoming arcs.
    pub fn source_transitions(&self) -> impl Iterator<Item = &'a NetElement> + '_ {
        self.elements(&self.basic_info().source_transitions)
    }

    /// Number of transitions without outgoing arcs.
    pub fn num_sink_transitions(&self) -> usize {
        self.basic_info().sink_transitions.len()
    }

    /// Transitions without outgoing arcs.
    pub fn sink_transitions(&self) -> impl Iterator<Item = &'a NetElement> + '_ {
        self.elements(&self.basic_info().sink_transitions)
    }

    /// Connectivity verdict, computed on first access.
    pub fn connectivity(&self) -> &Connectivity {
        self.connectivity.get_or_init(|| {
            if !self.config.check_connectivity {
                return Connectivity::Inconclusive(Inconclusive::Disabled);
            }
            let info = self.basic_info();
            compute_connectivity(
                &self.graph,
                &info.places,
                &info.transitions,
                &self.config.bridge_label,
                &self.diagnostics,
            )
        })
    }

    /// Number of nodes that are not connected, `None` when connectivity is inconclusive.
    pub fn num_not_connected_nodes(&self) -> Option<usize> {
        self.connectivity()
            .report()
            .map(|report| report.disconnected.len())
    }

    /// Nodes that are not connected, `None` when connectivity is inconclusive.
    pub fn not_connected_nodes(&self) -> Option<impl Iterator<Item = &'a NetElement> + '_> {
        let report = self.connectivity().report()?;
        Some(
            report
                .disconnected
                .iter()
                .filter_map(move |&node| self.graph.element(node)),
        )
    }

    /// Number of nodes that are not strongly connected, `None` when inconclusive.
    pub fn num_not_strongly_connected_nodes(&self) -> Option<usize> {
        self.connectivity()
            .report()
            .map(|report| report.not_strongly_connected.len())
    }

    /// Nodes that are not strongly connected, `None` when inconclusive.
    pub fn not_strongly_connected_nodes(
        &self,
    ) -> Option<impl Iterator<Item = &'a NetElement> + '_> {
        let report = self.connectivity().report()?;
        Some(
            report
                .not_strongly_connected
                .iter()
                .filter_map(move |&node| self.graph.element(node)),
        )
    }

    /// Free-choice violation groups, computed on first access.
    pub fn free_choice_violations(&self) -> &[ViolationGroup] {
        self.free_choice.get_or_init(|| {
            if !self.config.check_free_choice {
                self.diagnostics
                    .info(DiagnosticCategory::FreeChoice, "free-choice check disabled");
                return Vec::new();
            }
            let info = self.basic_info();
            let conflicts = free_choice_violations(&self.graph, &info.places, false);
            let synchronizations = free_choice_violations(&self.graph, &info.transitions, true);
            let groups = union_violations(conflicts, synchronizations);

            log::debug!("free choice: {} violation groups", groups.len());
            groups
        })
    }

    /// Number of free-choice violation groups.
    pub fn num_free_choice_violations(&self) -> usize {
        self.free_choice_violations().len()
    }

    /// Elements of one violation group in element order.
    pub fn violation_elements(&self, group: &ViolationGroup) -> Vec<&'a NetElement> {
        group
            .members()
            .iter()
            .filter_map(move |&node| self.graph.element(node))
            .collect()
    }
}
