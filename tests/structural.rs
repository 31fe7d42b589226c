//! Structural analysis integration tests.
//!
//! These tests drive the public API end to end:
//! 1. Build a net through `Net` or the lenient `Net::from_raw` import
//! 2. Run `StructuralAnalysis` with the default or a custom configuration
//! 3. Verify basic information, connectivity and free-choice results
//! 4. Verify the report tree and the diagnostics sink

use std::{collections::BTreeSet, sync::Arc};

use wfnet::{
    analysis::{AnalysisConfig, BranchKind, Connectivity, Inconclusive, InfoState, StructuralAnalysis},
    net::{DiagnosticCategory, Diagnostics, ElementSpec, Net, OperatorKind, RawArc, RawElement},
    utils::graph::{algorithms::Direction, NodeId},
    Error, Result,
};

/// Builds a net from place ids, transition ids and `(from, to)` arcs.
fn build_net(places: &[&str], transitions: &[&str], arcs: &[(&str, &str)]) -> Result<Net> {
    let mut net = Net::new();
    for &id in places {
        net.create_element(ElementSpec::place(id))?;
    }
    for &id in transitions {
        net.create_element(ElementSpec::transition(id))?;
    }
    for &(from, to) in arcs {
        net.create_arc(from, to)?;
    }
    Ok(net)
}

/// P1 -> T1 -> P2 -> T2 -> P3
fn linear_net() -> Result<Net> {
    build_net(
        &["P1", "P2", "P3"],
        &["T1", "T2"],
        &[("P1", "T1"), ("T1", "P2"), ("P2", "T2"), ("T2", "P3")],
    )
}

/// P1 -> T1 -> P2, P1 -> T2 -> P3, P4 -> T2
fn conflict_net() -> Result<Net> {
    build_net(
        &["P1", "P2", "P3", "P4"],
        &["T1", "T2"],
        &[
            ("P1", "T1"),
            ("P1", "T2"),
            ("P4", "T2"),
            ("T1", "P2"),
            ("T2", "P3"),
        ],
    )
}

fn ids<'e>(elements: impl Iterator<Item = &'e wfnet::net::NetElement>) -> Vec<&'e str> {
    elements.map(|e| e.id.as_str()).collect()
}

#[test]
fn test_linear_net_is_well_structured() -> Result<()> {
    let net = linear_net()?;
    let analysis = StructuralAnalysis::new(&net)?;

    assert_eq!(analysis.num_places(), 3);
    assert_eq!(analysis.num_transitions(), 2);
    assert_eq!(analysis.num_arcs(), 4);
    assert_eq!(ids(analysis.source_places()), vec!["P1"]);
    assert_eq!(ids(analysis.sink_places()), vec!["P3"]);

    let report = analysis.connectivity().report().expect("conclusive connectivity");
    assert!(report.disconnected.is_empty());
    assert!(report.is_strongly_connected());
    assert!(analysis.free_choice_violations().is_empty());
    assert!(analysis.report().is_sound_structure());
    Ok(())
}

#[test]
fn test_free_choice_violation_group() -> Result<()> {
    let net = conflict_net()?;
    let analysis = StructuralAnalysis::new(&net)?;

    let groups = analysis.free_choice_violations();
    assert_eq!(groups.len(), 1);

    let mut members = ids(analysis.violation_elements(&groups[0]).into_iter());
    members.sort_unstable();
    assert_eq!(members, vec!["P1", "P4", "T1", "T2"]);

    let kinds: BTreeSet<BranchKind> = groups[0].origins().iter().map(|o| o.kind).collect();
    assert_eq!(
        kinds,
        BTreeSet::from([BranchKind::Conflict, BranchKind::Synchronization])
    );
    Ok(())
}

#[test]
fn test_isolated_place_is_not_connected() -> Result<()> {
    let mut net = linear_net()?;
    net.create_element(ElementSpec::place("P5"))?;
    let analysis = StructuralAnalysis::new(&net)?;

    assert!(analysis.connectivity().is_conclusive());
    assert_eq!(ids(analysis.not_connected_nodes().expect("analyzed")), vec!["P5"]);
    assert_eq!(
        ids(analysis.not_strongly_connected_nodes().expect("analyzed")),
        vec!["P5"]
    );
    assert_eq!(analysis.num_source_places(), 2);
    Ok(())
}

#[test]
fn test_two_source_places_are_inconclusive() -> Result<()> {
    let net = build_net(
        &["P1", "P2", "P3"],
        &["T1"],
        &[("P1", "T1"), ("P2", "T1"), ("T1", "P3")],
    )?;
    let diagnostics = Arc::new(Diagnostics::new());
    let analysis = StructuralAnalysis::with_config(&net, AnalysisConfig::default(), diagnostics.clone())?;

    assert_eq!(
        analysis.connectivity(),
        &Connectivity::Inconclusive(Inconclusive::SourcePlaces(2))
    );
    assert_eq!(analysis.num_not_connected_nodes(), None);
    assert_eq!(analysis.num_not_strongly_connected_nodes(), None);
    assert!(analysis.not_connected_nodes().is_none());
    assert_eq!(diagnostics.by_category(DiagnosticCategory::Connectivity).len(), 1);

    let report = analysis.report();
    let connectivity = report.root().find("Connectivity").expect("connectivity node");
    assert_eq!(connectivity.state, InfoState::Info);
    Ok(())
}

#[test]
fn test_two_sink_places_are_inconclusive() -> Result<()> {
    let net = build_net(
        &["P1", "P2", "P3"],
        &["T1"],
        &[("P1", "T1"), ("T1", "P2"), ("T1", "P3")],
    )?;
    let analysis = StructuralAnalysis::new(&net)?;

    assert_eq!(
        analysis.connectivity().inconclusive(),
        Some(Inconclusive::SinkPlaces(2))
    );
    Ok(())
}

#[test]
fn test_dead_end_transition_is_not_strongly_connected() -> Result<()> {
    let net = build_net(
        &["P1", "P2", "P3"],
        &["T1", "T2", "T3"],
        &[
            ("P1", "T1"),
            ("T1", "P2"),
            ("P2", "T2"),
            ("T2", "P3"),
            ("P2", "T3"),
        ],
    )?;
    let analysis = StructuralAnalysis::new(&net)?;

    assert_eq!(analysis.num_not_connected_nodes(), Some(0));
    assert_eq!(
        ids(analysis.not_strongly_connected_nodes().expect("analyzed")),
        vec!["T3"]
    );
    assert_eq!(ids(analysis.sink_transitions()), vec!["T3"]);
    Ok(())
}

#[test]
fn test_disconnected_nodes_are_never_strongly_connected() -> Result<()> {
    let mut net = build_net(
        &["P1", "P2", "P3", "P4"],
        &["T1", "T2", "T3"],
        &[
            ("P1", "T1"),
            ("T1", "P2"),
            ("P2", "T2"),
            ("T2", "P3"),
            ("P2", "T3"),
        ],
    )?;
    net.create_element(ElementSpec::transition("T4"))?;
    let analysis = StructuralAnalysis::new(&net)?;

    let report = analysis.connectivity().report().expect("conclusive connectivity");
    assert!(!report.disconnected.is_empty());
    assert!(report.disconnected.is_subset(&report.not_strongly_connected));
    Ok(())
}

#[test]
fn test_violation_groups_have_disagreeing_branches() -> Result<()> {
    // P1 and P2 both feed T1 and T2, P3 additionally feeds T2
    let net = build_net(
        &["P1", "P2", "P3", "P4"],
        &["T1", "T2"],
        &[
            ("P1", "T1"),
            ("P1", "T2"),
            ("P2", "T1"),
            ("P2", "T2"),
            ("P3", "T2"),
            ("T1", "P4"),
            ("T2", "P4"),
        ],
    )?;
    let analysis = StructuralAnalysis::new(&net)?;
    let graph = analysis.graph();

    assert!(!analysis.free_choice_violations().is_empty());
    for group in analysis.free_choice_violations() {
        for origin in group.origins() {
            let (forward, backward) = match origin.kind {
                BranchKind::Conflict => (Direction::OUTBOUND, Direction::INBOUND),
                BranchKind::Synchronization => (Direction::INBOUND, Direction::OUTBOUND),
            };
            let branches = graph.connected_nodes(origin.node, forward);
            assert!(branches.len() >= 2);

            let sets: BTreeSet<BTreeSet<NodeId>> = branches
                .iter()
                .map(|&branch| graph.connected_nodes(branch, backward))
                .collect();
            assert!(sets.len() >= 2);
            assert!(group.contains(origin.node));
        }
    }
    Ok(())
}

#[test]
fn test_repeated_queries_use_the_cache() -> Result<()> {
    let net = conflict_net()?;
    let analysis = StructuralAnalysis::new(&net)?;

    let connectivity = analysis.connectivity().clone();
    let groups = analysis.free_choice_violations().to_vec();
    let sources = analysis.num_source_places();
    let queries = analysis.graph().query_count();

    assert_eq!(analysis.connectivity(), &connectivity);
    assert_eq!(analysis.free_choice_violations(), groups.as_slice());
    assert_eq!(analysis.num_source_places(), sources);
    assert_eq!(analysis.graph().query_count(), queries);
    Ok(())
}

#[test]
fn test_operators_count_as_transitions() -> Result<()> {
    let mut net = Net::new();
    net.create_element(ElementSpec::place("start"))?;
    net.create_element(ElementSpec::operator("split", OperatorKind::AndSplit))?;
    net.create_element(ElementSpec::place("left"))?;
    net.create_element(ElementSpec::place("right"))?;
    net.create_element(ElementSpec::operator("join", OperatorKind::AndJoin))?;
    net.create_element(ElementSpec::place("end"))?;
    for (from, to) in [
        ("start", "split"),
        ("split", "left"),
        ("split", "right"),
        ("left", "join"),
        ("right", "join"),
        ("join", "end"),
    ] {
        net.create_arc(from, to)?;
    }

    let analysis = StructuralAnalysis::new(&net)?;
    assert_eq!(analysis.num_transitions(), 2);
    assert_eq!(analysis.num_places(), 4);
    assert!(analysis.report().is_sound_structure());
    Ok(())
}

#[test]
fn test_lenient_import_skips_dangling_arcs() -> Result<()> {
    let diagnostics = Arc::new(Diagnostics::new());
    let net = Net::from_raw(
        vec![
            RawElement::new("p1", "start", "place"),
            RawElement::new("t1", "", "transition"),
            RawElement::new("p2", "end", "place"),
            RawElement::new("x1", "", "subprocess"),
        ],
        vec![
            RawArc::new("a1", "p1", "t1"),
            RawArc::new("a2", "t1", "p2"),
            RawArc::new("a3", "t1", "nowhere"),
        ],
        &diagnostics,
    );
    assert_eq!(net.element_count(), 3);

    let analysis = StructuralAnalysis::with_config(&net, AnalysisConfig::default(), diagnostics.clone())?;
    assert_eq!(analysis.num_arcs(), 3);
    assert_eq!(analysis.graph().skipped_arcs(), 1);
    assert!(analysis.connectivity().report().is_some_and(|r| r.is_strongly_connected()));
    assert_eq!(diagnostics.for_element("a3").len(), 1);
    assert!(diagnostics.has_warnings());
    assert!(!diagnostics.has_errors());
    Ok(())
}

#[test]
fn test_strict_mode_rejects_dangling_arcs() {
    let diagnostics = Arc::new(Diagnostics::new());
    let net = Net::from_raw(
        vec![RawElement::new("p1", "", "place")],
        vec![RawArc::new("a1", "p1", "t9")],
        &diagnostics,
    );

    let result = StructuralAnalysis::with_config(&net, AnalysisConfig::strict(), diagnostics);
    assert!(matches!(result, Err(Error::Malformed { .. })));
}

#[test]
fn test_editing_errors() -> Result<()> {
    let mut net = linear_net()?;

    assert!(matches!(
        net.create_element(ElementSpec::place("P1")),
        Err(Error::DuplicateElement(id)) if id == "P1"
    ));
    assert!(matches!(net.create_arc("P1", "P2"), Err(Error::InvalidArc { .. })));
    assert!(matches!(net.create_arc("P1", "T9"), Err(Error::ElementNotFound(_))));

    let removed = net.remove_element("T2")?;
    assert_eq!(removed.id, "T2");
    assert_eq!(net.arc_count(), 2);

    let analysis = StructuralAnalysis::new(&net)?;
    assert_eq!(ids(analysis.sink_places()), vec!["P2", "P3"]);
    Ok(())
}

#[test]
fn test_report_tree() -> Result<()> {
    let net = conflict_net()?;
    let report = StructuralAnalysis::new(&net)?.report();

    assert!(!report.is_sound_structure());
    let sinks = report.root().find("Sink places").expect("sink node");
    assert_eq!(sinks.state, InfoState::Error);
    assert_eq!(sinks.referenced_elements(), vec!["P2", "P3"]);

    let violations = report.root().find("Free-choice violations").expect("free-choice node");
    assert_eq!(violations.children.len(), 1);

    let text = report.to_string();
    assert!(text.starts_with("[INFO] Structural analysis\n"));
    assert!(text.contains("[ERROR] Free-choice violations: 1"));
    Ok(())
}
