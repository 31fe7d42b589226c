//! Generic directed graph infrastructure for structural net analysis.
//!
//! A workflow net is a bipartite directed graph. The analyses in [`crate::analysis`] do not
//! work on the net container directly; they build a [`DirectedGraph`] view of it once and
//! then navigate that view through the adjacency traits defined here.
//!
//! # Architecture
//!
//! - **Core Types**: [`NodeId`], [`EdgeId`], and [`DirectedGraph`] provide the fundamental
//!   building blocks for graph representation
//! - **Traits**: [`GraphBase`], [`Successors`], [`Predecessors`] and [`RootedGraph`] let
//!   algorithms run over any graph shape, including overlays that add virtual nodes
//! - **Algorithms**: direction-filtered neighbourhoods and all-pairs shortest routes
//!
//! # Design Principles
//!
//! ## Strongly-Typed Identifiers
//!
//! Node and edge identifiers use newtype wrappers to prevent accidental mixing of
//! indices and provide type safety at compile time.
//!
//! ## Immutable After Construction
//!
//! Graphs are built once per analysis and treated as read-only afterwards. A changed
//! net gets a new graph.
//!
//! # Examples
//!
//! ```rust
//! use wfnet::utils::graph::{DirectedGraph, NodeId, Successors};
//!
//! let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
//! let p1 = graph.add_node("p1");
//! let t1 = graph.add_node("t1");
//! graph.add_edge(p1, t1, ())?;
//!
//! let next: Vec<NodeId> = graph.successors(p1).collect();
//! assert_eq!(next, vec![t1]);
//! # Ok::<(), wfnet::Error>(())
//! ```

mod directed;
mod edge;
mod node;
mod traits;

pub mod algorithms;

// Re-export core types at module level
pub use directed::DirectedGraph;
pub use edge::EdgeId;
pub use node::NodeId;
pub use traits::{GraphBase, Predecessors, RootedGraph, Successors};
