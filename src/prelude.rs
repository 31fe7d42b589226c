//! # wfnet Prelude
//!
//! The types needed to build a net, run the structural checks and read the results.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all wfnet operations
pub use crate::Error;

/// The result type used throughout wfnet
pub use crate::Result;

// ================================================================================================
// Net Model
// ================================================================================================

/// Net container and elements
pub use crate::net::{ElementKind, ElementSpec, Net, NetArc, NetElement, NodeKind, OperatorKind};

/// Loader records for lenient import
pub use crate::net::{RawArc, RawElement};

/// Diagnostics sink
pub use crate::net::{Diagnostic, DiagnosticCategory, DiagnosticSeverity, Diagnostics};

// ================================================================================================
// Analysis
// ================================================================================================

/// Cached structural analysis and its configuration
pub use crate::analysis::{AnalysisConfig, BasicNetInfo, StructuralAnalysis};

/// Check results
pub use crate::analysis::{
    BranchKind, Connectivity, ConnectivityReport, Inconclusive, ViolationGroup, ViolationOrigin,
};

/// Report tree
pub use crate::analysis::{AnalysisReport, InfoNode, InfoState};

/// Graph view of a net
pub use crate::analysis::{ArcConfiguration, NetGraph};

// ================================================================================================
// Graph Infrastructure
// ================================================================================================

/// Node identifiers and adjacency traits
pub use crate::utils::graph::{GraphBase, NodeId, Predecessors, Successors};

/// Direction filter and route tables
pub use crate::utils::graph::algorithms::{Direction, RouteEntry, RouteTable};
