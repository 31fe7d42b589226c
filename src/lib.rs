// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # wfnet
//!
//! Structural verification of workflow nets.
//!
//! A workflow net is a Petri net with a dedicated start and end: places and transitions
//! connected by arcs, with one source place where cases begin and one sink place where
//! they end. Before a net can be sound, it has to pass structural checks that need
//! nothing but its topology. `wfnet` implements those checks:
//!
//! - **Basic information** - places, transitions, source and sink nodes, arc count
//! - **Connectivity** - every node lies on an undirected (weak) and a directed (strong)
//!   route from the source place to the sink place and back
//! - **Free choice** - transitions sharing an input place share all input places
//!
//! Token-game properties (reachability, deadlocks, invariants) are out of scope.
//!
//! ## Quick Start
//!
//! ```rust
//! use wfnet::prelude::*;
//!
//! // p1 -> t1 -> p2, p1 -> t2 -> p2, p3 -> t2
//! let mut net = Net::new();
//! for place in ["p1", "p2", "p3"] {
//!     net.create_element(ElementSpec::place(place))?;
//! }
//! for transition in ["t1", "t2"] {
//!     net.create_element(ElementSpec::transition(transition))?;
//! }
//! for (from, to) in [("p1", "t1"), ("p1", "t2"), ("p3", "t2"), ("t1", "p2"), ("t2", "p2")] {
//!     net.create_arc(from, to)?;
//! }
//!
//! let analysis = StructuralAnalysis::new(&net)?;
//! assert_eq!(analysis.num_source_places(), 2);
//! assert!(!analysis.connectivity().is_conclusive());
//! assert_eq!(analysis.num_free_choice_violations(), 1);
//! # Ok::<(), wfnet::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`net`] - The net model: elements, arcs, lenient import and the diagnostics sink
//! - [`analysis`] - Graph accessor, connectivity, free choice, result cache and report
//! - [`utils::graph`] - Generic directed graph and the route calculator
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! Editing a net returns [`Result`]. The analyses do not fail on odd input: dangling
//! arcs and unknown element kinds are reported to a [`net::Diagnostics`] sink and
//! skipped, and a connectivity check that cannot be anchored reports
//! [`analysis::Connectivity::Inconclusive`]. Set [`analysis::AnalysisConfig::strict`]
//! to turn malformed arcs into [`Error::Malformed`] instead.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and installs no logger itself.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use wfnet::prelude::*;
///
/// let mut net = Net::new();
/// net.create_element(ElementSpec::place("p1"))?;
/// let analysis = StructuralAnalysis::new(&net)?;
/// assert_eq!(analysis.num_places(), 1);
/// # Ok::<(), wfnet::Error>(())
/// ```
pub mod prelude;

/// Workflow net model.
pub mod net;

/// Structural checks and their cache.
pub mod analysis;

/// Generic building blocks.
pub mod utils;

/// `wfnet` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `wfnet` Error type
///
/// See [`error::Error`] for the individual variants.
pub use error::Error;
