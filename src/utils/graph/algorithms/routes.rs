//! All-pairs shortest routes by Moore's algorithm.
//!
//! Arc weights are ignored: every arc has length one, so a breadth-first wavefront from
//! each node yields exact shortest distances. The result is kept as a full table so that
//! both "reachable from" (one row) and "reaches" (one column) questions can be answered
//! for any node after a single calculation.
//!
//! # Table Layout
//!
//! A [`RouteTable`] over `n` nodes holds `n * n` [`RouteEntry`] cells. Row `i` describes
//! the wavefront started at node `i`, column `j` describes node `j` as seen from that row.
//! Rows and columns use the same ordering, the order in which the nodes were passed in.
//!
//! # Invariants
//!
//! - `entry(i, i)` has distance 0 and no predecessor
//! - a cell has a predecessor iff its distance is greater than 0
//! - the predecessor of a cell at distance `d` sits in the same row at distance `d - 1`,
//!   so predecessor chains always terminate at the diagonal

use std::collections::{BTreeSet, HashMap};

use crate::{
    utils::graph::{
        algorithms::adjacency::{connected_nodes, Direction},
        NodeId, Predecessors, Successors,
    },
    Error, Result,
};

/// One cell of a [`RouteTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    element: NodeId,
    distance: Option<usize>,
    predecessor: Option<usize>,
}

impl RouteEntry {
    fn unvisited(element: NodeId) -> Self {
        RouteEntry {
            element,
            distance: None,
            predecessor: None,
        }
    }

    /// The node this cell describes (the column's node).
    #[must_use]
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// Number of arcs on the shortest route from the row's node, `None` if unreachable.
    #[must_use]
    pub fn distance(&self) -> Option<usize> {
        self.distance
    }

    /// Column of the previous cell on the shortest route, `None` at the diagonal and for
    /// unreachable cells.
    #[must_use]
    pub fn predecessor(&self) -> Option<usize> {
        self.predecessor
    }

    /// Returns `true` if the row's node reaches this cell's node.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// Shortest-route information between every pair of a node set.
///
/// Built by [`all_pairs_routes`]; read-only afterwards.
#[derive(Debug, Clone)]
pub struct RouteTable {
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    cells: Vec<RouteEntry>,
}

impl RouteTable {
    fn new(nodes: Vec<NodeId>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(position, &node)| (node, position))
            .collect();
        let mut cells = Vec::with_capacity(nodes.len() * nodes.len());
        for _ in 0..nodes.len() {
            cells.extend(nodes.iter().map(|&node| RouteEntry::unvisited(node)));
        }

        RouteTable {
            nodes,
            index,
            cells,
        }
    }

    /// Number of rows (and columns) of the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the table was built over an empty node set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The analyzed nodes in row/column order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Returns the row/column position of a node, if it is part of the table.
    #[must_use]
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.index.get(&node).copied()
    }

    /// Returns one row of the table.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[RouteEntry]> {
        let n = self.nodes.len();
        if row >= n {
            return None;
        }
        Some(&self.cells[row * n..(row + 1) * n])
    }

    /// Returns the cell at `(row, column)`.
    #[must_use]
    pub fn entry(&self, row: usize, column: usize) -> Option<&RouteEntry> {
        self.row(row)?.get(column)
    }

    /// Shortest distance from `from` to `to`, `None` if unreachable or not in the table.
    #[must_use]
    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<usize> {
        let row = self.index_of(from)?;
        let column = self.index_of(to)?;
        self.entry(row, column)?.distance()
    }

    /// Reconstructs the shortest route from `from` to `to` by following predecessor links.
    ///
    /// The returned path starts with `from` and ends with `to`; it has `distance + 1` nodes.
    #[must_use]
    pub fn route(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        let row = self.row(self.index_of(from)?)?;
        let mut column = self.index_of(to)?;
        let distance = row[column].distance()?;

        let mut path = Vec::with_capacity(distance + 1);
        path.push(row[column].element());
        while let Some(previous) = row[column].predecessor() {
            column = previous;
            path.push(row[column].element());
        }
        path.reverse();
        Some(path)
    }

    /// Collects every node that lacks a route from or to `central`.
    ///
    /// A node `x` is reported when `central` does not reach `x` (the central row) or when
    /// `x` does not reach `central` (the central column). If `central` is not part of the
    /// table, nothing is reported.
    #[must_use]
    pub fn unconnected_nodes(&self, central: NodeId) -> BTreeSet<NodeId> {
        let mut unconnected = BTreeSet::new();
        let Some(center) = self.index_of(central) else {
            return unconnected;
        };

        for (position, &node) in self.nodes.iter().enumerate() {
            let from_center = self.entry(center, position).is_some_and(RouteEntry::is_reachable);
            let to_center = self.entry(position, center).is_some_and(RouteEntry::is_reachable);
            if !from_center || !to_center {
                unconnected.insert(node);
            }
        }
        unconnected
    }
}

/// Computes shortest routes between all pairs of `nodes`.
///
/// Only nodes contained in `nodes` take part: arcs leading to other nodes of the graph
/// are not followed. With `ignore_direction` set, arcs are followed both ways, which
/// answers weak-connectivity questions; otherwise only outbound arcs are followed.
/// Duplicate entries in `nodes` are ignored after their first occurrence.
///
/// # Errors
///
/// Returns [`Error::GraphError`] if any node is not part of `graph`. No partial table is
/// produced in that case.
///
/// # Panics
///
/// Debug builds assert that `nodes` is not empty. Release builds return an empty table.
///
/// # Complexity
///
/// One breadth-first search per node: O(N · (V + E)) time and O(N²) space for N nodes.
///
/// # Examples
///
/// ```rust
/// use wfnet::utils::graph::{DirectedGraph, algorithms::all_pairs_routes};
///
/// // p1 -> t1 -> p2
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let p1 = graph.add_node("p1");
/// let t1 = graph.add_node("t1");
/// let p2 = graph.add_node("p2");
/// graph.add_edge(p1, t1, ())?;
/// graph.add_edge(t1, p2, ())?;
///
/// let directed = all_pairs_routes(&graph, &[p1, t1, p2], false)?;
/// assert_eq!(directed.distance(p1, p2), Some(2));
/// assert_eq!(directed.distance(p2, p1), None);
/// assert_eq!(directed.route(p1, p2), Some(vec![p1, t1, p2]));
///
/// let undirected = all_pairs_routes(&graph, &[p1, t1, p2], true)?;
/// assert_eq!(undirected.distance(p2, p1), Some(2));
/// # Ok::<(), wfnet::Error>(())
/// ```
pub fn all_pairs_routes<G>(graph: &G, nodes: &[NodeId], ignore_direction: bool) -> Result<RouteTable>
where
    G: Successors + Predecessors,
{
    debug_assert!(!nodes.is_empty(), "route calculation over an empty node set");

    let mut unique = Vec::with_capacity(nodes.len());
    let mut seen = BTreeSet::new();
    for &node in nodes {
        if node.index() >= graph.node_count() {
            return Err(Error::GraphError(format!(
                "node {} is not part of the analyzed graph with {} nodes",
                node,
                graph.node_count()
            )));
        }
        if seen.insert(node) {
            unique.push(node);
        }
    }

    let direction = if ignore_direction {
        Direction::BOTH
    } else {
        Direction::OUTBOUND
    };

    let mut table = RouteTable::new(unique);
    let n = table.len();

    for source in 0..n {
        let base = source * n;
        table.cells[base + source].distance = Some(0);

        let mut frontier = vec![source];
        let mut level = 0;
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for &column in &frontier {
                let current = table.nodes[column];
                for neighbor in connected_nodes(graph, current, direction) {
                    let Some(&target) = table.index.get(&neighbor) else {
                        continue;
                    };
                    let cell = &mut table.cells[base + target];
                    if cell.distance.is_none() {
                        cell.distance = Some(level + 1);
                        cell.predecessor = Some(column);
                        next.push(target);
                    }
                }
            }
            frontier = next;
            level += 1;
        }
    }

    log::debug!(
        "computed {}x{} route table (ignore_direction: {})",
        n,
        n,
        ignore_direction
    );
    Ok(table)
}
