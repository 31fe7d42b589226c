//! Utility building blocks shared by the net model and the analyses.
//!
//! - [`graph`] - Generic directed graph storage, adjacency traits and graph algorithms

pub mod graph;
