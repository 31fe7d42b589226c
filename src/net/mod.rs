//! Workflow net model.
//!
//! A workflow net is a bipartite directed graph of places and transitions. This module
//! holds the editable model the analyses read from:
//!
//! - [`Net`] - Container of elements and arcs with the editing operations
//! - [`NetElement`], [`ElementKind`], [`OperatorKind`], [`NodeKind`] - Places and transitions
//! - [`NetArc`] - Arcs between elements, referenced by identifier
//! - [`RawElement`], [`RawArc`] - Loader records accepted by [`Net::from_raw`]
//! - [`Diagnostics`] - Injected sink for everything that was skipped or inconclusive

mod arc;
mod container;
mod diagnostics;
mod element;
mod import;

pub use arc::NetArc;
pub use container::{Net, RootElement};
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticSeverity, Diagnostics};
pub use element::{ElementKind, ElementSpec, NetElement, NodeKind, OperatorKind};
pub use import::{RawArc, RawElement};
