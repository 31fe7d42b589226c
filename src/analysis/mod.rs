//! Structural verification of workflow nets.
//!
//! This module provides the structural checks that precede a soundness verdict. It
//! builds upon the generic graph infrastructure in [`crate::utils::graph`] and the net
//! model in [`crate::net`].
//!
//! # Architecture
//!
//! - [`NetGraph`] - Read-only graph view of a [`crate::net::Net`], the only way the
//!   checks touch the net
//! - [`BridgedGraph`] - Overlay adding the synthetic transition that closes the net
//! - [`compute_connectivity`] - Weak and strong connectivity against the bridge
//! - [`free_choice_violations`] - Conflicts and synchronizations breaking free choice
//! - [`StructuralAnalysis`] - Caches every check per net
//! - [`AnalysisReport`] - Tree summary for display
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use wfnet::analysis::{AnalysisConfig, StructuralAnalysis};
//! use wfnet::net::{Diagnostics, ElementSpec, Net};
//!
//! let mut net = Net::new();
//! for place in ["p1", "p2"] {
//!     net.create_element(ElementSpec::place(place))?;
//! }
//! net.create_element(ElementSpec::transition("t1"))?;
//! net.create_arc("p1", "t1")?;
//! net.create_arc("t1", "p2")?;
//!
//! let diagnostics = Arc::new(Diagnostics::new());
//! let analysis = StructuralAnalysis::with_config(&net, AnalysisConfig::new(), diagnostics)?;
//!
//! assert!(analysis.connectivity().is_conclusive());
//! assert_eq!(analysis.not_connected_nodes().map(Iterator::count), Some(0));
//! assert!(analysis.report().is_sound_structure());
//! # Ok::<(), wfnet::Error>(())
//! ```

mod bridge;
mod config;
mod connectivity;
mod freechoice;
mod graph;
mod report;
mod structural;

// Re-export primary types at module level
pub use bridge::BridgedGraph;
pub use config::AnalysisConfig;
pub use connectivity::{compute_connectivity, Connectivity, ConnectivityReport, Inconclusive};
pub use freechoice::{
    free_choice_violations, union_violations, BranchKind, ViolationGroup, ViolationOrigin,
};
pub use graph::{ArcConfiguration, NetGraph};
pub use report::{AnalysisReport, InfoNode, InfoState};
pub use structural::{BasicNetInfo, StructuralAnalysis};
