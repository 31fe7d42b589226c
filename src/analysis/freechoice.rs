//! Free-choice property.
//!
//! A net is free-choice when any two transitions sharing an input place have exactly
//! the same input places. The check looks at every branching node:
//!
//! - a place with several output transitions (a **conflict**) violates the property if
//!   those transitions do not all have the same set of input places
//! - a transition with several input places (a **synchronization**) violates it if those
//!   places do not all have the same set of output transitions
//!
//! The second case is the first one with arc directions swapped. Each violation is
//! reported as the group of all nodes involved: the branches and all of their
//! predecessors (successors for synchronizations).

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use crate::utils::graph::{
    algorithms::{connected_nodes, Direction},
    NodeId, Predecessors, Successors,
};

/// Shape of the branching that caused a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BranchKind {
    /// Forward branching, a place choosing between transitions
    Conflict,
    /// Backward branching, a transition joining places
    Synchronization,
}

impl fmt::Display for BranchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchKind::Conflict => f.write_str("conflict"),
            BranchKind::Synchronization => f.write_str("synchronization"),
        }
    }
}

/// A branching node whose branches disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViolationOrigin {
    /// The branching node
    pub node: NodeId,
    /// Direction of the branching
    pub kind: BranchKind,
}

/// A set of nodes implicated together in one free-choice violation.
///
/// Different branching nodes can implicate the same set of nodes; such groups are
/// reported once with all of their origins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationGroup {
    members: BTreeSet<NodeId>,
    origins: Vec<ViolationOrigin>,
}

impl ViolationGroup {
    /// All implicated nodes.
    #[must_use]
    pub fn members(&self) -> &BTreeSet<NodeId> {
        &self.members
    }

    /// The branching nodes that led to this group.
    #[must_use]
    pub fn origins(&self) -> &[ViolationOrigin] {
        &self.origins
    }

    /// Returns true if `node` is implicated.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.members.contains(&node)
    }

    /// Number of implicated nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Collects violation groups, merging groups with identical members.
fn merge_groups<I>(groups: I) -> Vec<ViolationGroup>
where
    I: IntoIterator<Item = ViolationGroup>,
{
    let mut merged: BTreeMap<BTreeSet<NodeId>, Vec<ViolationOrigin>> = BTreeMap::new();
    for group in groups {
        let origins = merged.entry(group.members).or_default();
        for origin in group.origins {
            if !origins.contains(&origin) {
                origins.push(origin);
            }
        }
    }

    merged
        .into_iter()
        .map(|(members, origins)| ViolationGroup { members, origins })
        .collect()
}

/// Finds the branching nodes among `nodes` whose branches disagree.
///
/// With `swap_direction` unset, the branches of a node are its successors and each
/// branch is characterised by its predecessor set (conflicts). With `swap_direction`
/// set, both directions are exchanged (synchronizations). The first branch's set is the
/// baseline; any branch with a different set makes the node a violation. Nodes with
/// fewer than two branches are never reported.
///
/// # Examples
///
/// ```rust
/// use wfnet::analysis::free_choice_violations;
/// use wfnet::utils::graph::DirectedGraph;
///
/// // p0 -> t1, p0 -> t2, p3 -> t2
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let p0 = graph.add_node("p0");
/// let t1 = graph.add_node("t1");
/// let t2 = graph.add_node("t2");
/// let p3 = graph.add_node("p3");
/// graph.add_edge(p0, t1, ())?;
/// graph.add_edge(p0, t2, ())?;
/// graph.add_edge(p3, t2, ())?;
///
/// let groups = free_choice_violations(&graph, &[p0, p3], false);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].len(), 4);
/// # Ok::<(), wfnet::Error>(())
/// ```
pub fn free_choice_violations<G>(graph: &G, nodes: &[NodeId], swap_direction: bool) -> Vec<ViolationGroup>
where
    G: Successors + Predecessors,
{
    let (forward, kind) = if swap_direction {
        (Direction::INBOUND, BranchKind::Synchronization)
    } else {
        (Direction::OUTBOUND, BranchKind::Conflict)
    };
    let backward = forward.reversed();

    let mut groups = Vec::new();
    for &node in nodes {
        let branches = connected_nodes(graph, node, forward);
        if branches.len() < 2 {
            continue;
        }

        let mut baseline: Option<BTreeSet<NodeId>> = None;
        let mut violation = false;
        let mut members = BTreeSet::new();
        for &branch in &branches {
            let inputs = connected_nodes(graph, branch, backward);
            match &baseline {
                None => baseline = Some(inputs.clone()),
                Some(expected) => violation |= *expected != inputs,
            }
            members.extend(inputs);
            members.insert(branch);
        }

        if violation {
            log::debug!("free-choice {kind} at node {node}: {} nodes implicated", members.len());
            groups.push(ViolationGroup {
                members,
                origins: vec![ViolationOrigin { node, kind }],
            });
        }
    }

    merge_groups(groups)
}

/// Union of two violation results, merging groups with identical members.
pub fn union_violations(first: Vec<ViolationGroup>, second: Vec<ViolationGroup>) -> Vec<ViolationGroup> {
    merge_groups(first.into_iter().chain(second))
}
