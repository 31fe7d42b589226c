//! Tree-shaped summary of a structural analysis.
//!
//! The report mirrors what an editor shows in its analysis panel: one branch per check,
//! each with a state and, where relevant, the elements it refers to. Selecting a branch
//! in a viewer highlights [`InfoNode::referenced_elements`].

use std::fmt;

use crate::{
    analysis::{Connectivity, StructuralAnalysis},
    net::NetElement,
};

/// Verdict attached to a report node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoState {
    /// Nothing to complain about
    Ok,
    /// Neutral information
    Info,
    /// A structural defect
    Error,
}

impl fmt::Display for InfoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoState::Ok => write!(f, "OK"),
            InfoState::Info => write!(f, "INFO"),
            InfoState::Error => write!(f, "ERROR"),
        }
    }
}

/// One node of an [`AnalysisReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoNode {
    /// Display text
    pub label: String,
    /// Verdict
    pub state: InfoState,
    /// Identifiers of the elements this node refers to directly
    pub elements: Vec<String>,
    /// Child nodes
    pub children: Vec<InfoNode>,
}

impl InfoNode {
    /// Creates a node without elements or children.
    pub fn new(label: impl Into<String>, state: InfoState) -> Self {
        InfoNode {
            label: label.into(),
            state,
            elements: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a leaf referring to a single element.
    pub fn element(element: &NetElement, state: InfoState) -> Self {
        InfoNode {
            label: element.to_string(),
            state,
            elements: vec![element.id.clone()],
            children: Vec::new(),
        }
    }

    /// Creates a group node with one element leaf per element.
    pub fn group<'e>(
        label: impl Into<String>,
        state: InfoState,
        elements: impl IntoIterator<Item = &'e NetElement>,
    ) -> Self {
        let mut node = InfoNode::new(label, state);
        node.children = elements
            .into_iter()
            .map(|element| InfoNode::element(element, state))
            .collect();
        node
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: InfoNode) -> Self {
        self.children.push(child);
        self
    }

    /// Identifiers of all elements referenced by this node and its descendants.
    pub fn referenced_elements(&self) -> Vec<&str> {
        let mut collected: Vec<&str> = self.elements.iter().map(String::as_str).collect();
        for child in &self.children {
            collected.extend(child.referenced_elements());
        }
        collected
    }

    /// Finds the first node, depth-first, whose label starts with `prefix`.
    pub fn find(&self, prefix: &str) -> Option<&InfoNode> {
        if self.label.starts_with(prefix) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(prefix))
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{:indent$}[{}] {}", "", self.state, self.label, indent = depth * 2)?;
        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Report tree of a [`StructuralAnalysis`].
///
/// # Examples
///
/// ```rust
/// use wfnet::analysis::{InfoState, StructuralAnalysis};
/// use wfnet::net::{ElementSpec, Net};
///
/// let mut net = Net::new();
/// net.create_element(ElementSpec::place("p1"))?;
/// net.create_element(ElementSpec::transition("t1"))?;
/// net.create_element(ElementSpec::place("p2"))?;
/// net.create_arc("p1", "t1")?;
/// net.create_arc("t1", "p2")?;
///
/// let report = StructuralAnalysis::new(&net)?.report();
/// assert_eq!(report.root().find("Source places").map(|n| n.state), Some(InfoState::Ok));
/// println!("{report}");
/// # Ok::<(), wfnet::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    root: InfoNode,
}

fn ok_if(condition: bool) -> InfoState {
    if condition {
        InfoState::Ok
    } else {
        InfoState::Error
    }
}

impl AnalysisReport {
    /// Builds the report, running every enabled check.
    pub fn from_analysis(analysis: &StructuralAnalysis<'_>) -> Self {
        let statistics = InfoNode::new("Net statistics", InfoState::Info)
            .with_child(InfoNode::group(
                format!("Places: {}", analysis.num_places()),
                InfoState::Info,
                analysis.places(),
            ))
            .with_child(InfoNode::group(
                format!("Transitions: {}", analysis.num_transitions()),
                InfoState::Info,
                analysis.transitions(),
            ))
            .with_child(InfoNode::new(
                format!("Arcs: {}", analysis.num_arcs()),
                InfoState::Info,
            ));

        let mut root = InfoNode::new("Structural analysis", InfoState::Info)
            .with_child(statistics)
            .with_child(InfoNode::group(
                format!("Source places: {}", analysis.num_source_places()),
                ok_if(analysis.num_source_places() == 1),
                analysis.source_places(),
            ))
            .with_child(InfoNode::group(
                format!("Sink places: {}", analysis.num_sink_places()),
                ok_if(analysis.num_sink_places() == 1),
                analysis.sink_places(),
            ))
            .with_child(InfoNode::group(
                format!("Source transitions: {}", analysis.num_source_transitions()),
                ok_if(analysis.num_source_transitions() == 0),
                analysis.source_transitions(),
            ))
            .with_child(InfoNode::group(
                format!("Sink transitions: {}", analysis.num_sink_transitions()),
                ok_if(analysis.num_sink_transitions() == 0),
                analysis.sink_transitions(),
            ))
            .with_child(Self::connectivity_node(analysis));

        if analysis.config().check_free_choice {
            root = root.with_child(Self::free_choice_node(analysis));
        }

        AnalysisReport { root }
    }

    fn connectivity_node(analysis: &StructuralAnalysis<'_>) -> InfoNode {
        match analysis.connectivity() {
            Connectivity::Inconclusive(reason) => {
                InfoNode::new(format!("Connectivity: inconclusive ({reason})"), InfoState::Info)
            }
            Connectivity::Analyzed(report) => {
                let disconnected = InfoNode::group(
                    format!("Not connected nodes: {}", report.disconnected.len()),
                    ok_if(report.disconnected.is_empty()),
                    analysis.not_connected_nodes().into_iter().flatten(),
                );
                let not_strong = InfoNode::group(
                    format!(
                        "Not strongly connected nodes: {}",
                        report.not_strongly_connected.len()
                    ),
                    ok_if(report.not_strongly_connected.is_empty()),
                    analysis.not_strongly_connected_nodes().into_iter().flatten(),
                );
                InfoNode::new(
                    format!("Connectivity (closed by {})", analysis.config().bridge_label),
                    ok_if(disconnected.state == InfoState::Ok && not_strong.state == InfoState::Ok),
                )
                .with_child(disconnected)
                .with_child(not_strong)
            }
        }
    }

    fn free_choice_node(analysis: &StructuralAnalysis<'_>) -> InfoNode {
        let groups = analysis.free_choice_violations();
        let mut node = InfoNode::new(
            format!("Free-choice violations: {}", groups.len()),
            ok_if(groups.is_empty()),
        );
        for (index, group) in groups.iter().enumerate() {
            node.children.push(InfoNode::group(
                format!("Violation {}: {} nodes", index + 1, group.len()),
                InfoState::Error,
                analysis.violation_elements(group),
            ));
        }
        node
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &InfoNode {
        &self.root
    }

    /// Returns true if no node of the report is in the error state.
    #[must_use]
    pub fn is_sound_structure(&self) -> bool {
        fn clean(node: &InfoNode) -> bool {
            node.state != InfoState::Error && node.children.iter().all(clean)
        }
        clean(&self.root)
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_indented(f, 0)
    }
}

impl StructuralAnalysis<'_> {
    /// Builds the report tree for this analysis.
    pub fn report(&self) -> AnalysisReport {
        AnalysisReport::from_analysis(self)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{analysis::AnalysisConfig, net::Diagnostics, test::{free_choice_violation_net, linear_net, two_sources_net}};

    #[test]
    fn test_sound_net_report() {
        let net = linear_net();
        let report = StructuralAnalysis::new(&net).unwrap().report();

        assert!(report.is_sound_structure());
        let sources = report.root().find("Source places").unwrap();
        assert_eq!(sources.referenced_elements(), vec!["p1"]);
        assert_eq!(
            report.root().find("Places").unwrap().referenced_elements(),
            vec!["p1", "p2", "p3"]
        );
    }

    #[test]
    fn test_violation_report() {
        let net = free_choice_violation_net();
        let report = StructuralAnalysis::new(&net).unwrap().report();

        assert!(!report.is_sound_structure());
        let violations = report.root().find("Free-choice violations").unwrap();
        assert_eq!(violations.state, InfoState::Error);
        assert_eq!(violations.children.len(), 1);
        assert_eq!(violations.referenced_elements().len(), 4);
    }

    #[test]
    fn test_inconclusive_connectivity_is_info() {
        let net = two_sources_net();
        let report = StructuralAnalysis::new(&net).unwrap().report();

        let connectivity = report.root().find("Connectivity").unwrap();
        assert_eq!(connectivity.state, InfoState::Info);
        assert!(connectivity.label.contains("inconclusive"));
        assert!(connectivity.children.is_empty());
    }

    #[test]
    fn test_connectivity_names_bridge_transition() {
        let net = linear_net();
        let diagnostics = Arc::new(Diagnostics::new());
        let config = AnalysisConfig::new().with_bridge_label("close");
        let report = StructuralAnalysis::with_config(&net, config, diagnostics)
            .unwrap()
            .report();

        let connectivity = report.root().find("Connectivity").unwrap();
        assert_eq!(connectivity.label, "Connectivity (closed by close)");
        assert_eq!(connectivity.state, InfoState::Ok);
    }

    #[test]
    fn test_display_indents_children() {
        let node = InfoNode::new("root", InfoState::Info)
            .with_child(InfoNode::new("child", InfoState::Ok).with_child(InfoNode::new("leaf", InfoState::Error)));
        let report = AnalysisReport { root: node };

        assert_eq!(report.to_string(), "[INFO] root\n  [OK] child\n    [ERROR] leaf\n");
    }
}
