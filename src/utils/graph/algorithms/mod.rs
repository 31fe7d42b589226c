//! Graph algorithms for structural net analysis.
//!
//! # Available Algorithms
//!
//! ## Neighbourhood
//!
//! - [`connected_nodes`] - Set of direct neighbours filtered by [`Direction`]
//!
//! ## Shortest Routes
//!
//! - [`all_pairs_routes`] - Moore's breadth-first wavefront from every node of a node set
//! - [`RouteTable`] - Distances and predecessor links for every pair
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | Neighbourhood | O(degree) | Source/sink classification, free-choice comparison |
//! | All-pairs routes | O(N · (V + E)) | Weak and strong connectivity |

mod adjacency;
mod routes;

pub use adjacency::{connected_nodes, Direction};
pub use routes::{all_pairs_routes, RouteEntry, RouteTable};
