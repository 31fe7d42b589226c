//! Lenient construction of a [`Net`] from loader records.
//!
//! File loaders hand over flat element and arc records. Real-world files contain
//! elements the structural checks have no use for (annotations, subprocess markers,
//! resources) and occasionally arcs pointing at elements that were dropped. Import keeps
//! going in both cases: unknown element kinds and duplicate identifiers are reported to
//! the [`Diagnostics`] sink and skipped, arcs are kept as written so that the analysis
//! accessor can decide what to do with dangling endpoints.

use crate::net::{
    Diagnostic, DiagnosticCategory, DiagnosticSeverity, Diagnostics, ElementKind, Net, NetArc,
    NetElement,
};

/// An element record as produced by a file loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawElement {
    /// Element identifier
    pub id: String,
    /// Display name, may be empty
    pub name: String,
    /// Kind tag, see [`ElementKind::from_tag`]
    pub kind: String,
}

impl RawElement {
    /// Creates a new element record.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        RawElement {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// An arc record as produced by a file loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArc {
    /// Arc identifier
    pub id: String,
    /// Identifier of the source element
    pub source: String,
    /// Identifier of the target element
    pub target: String,
}

impl RawArc {
    /// Creates a new arc record.
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        RawArc {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

fn skipped(diagnostics: &Diagnostics, id: &str, message: String) {
    log::warn!("{message}");
    diagnostics.push(
        Diagnostic::new(
            DiagnosticSeverity::Warning,
            DiagnosticCategory::Element,
            message,
        )
        .with_element(id),
    );
}

impl Net {
    /// Builds a net from loader records, skipping what cannot be interpreted.
    ///
    /// - elements with an empty identifier, an unknown kind tag or an identifier seen
    ///   before are skipped with a warning
    /// - an empty name falls back to the identifier
    /// - arcs are kept verbatim, including arcs whose endpoints are missing; only arcs
    ///   repeating an earlier arc identifier are skipped
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wfnet::net::{Diagnostics, Net, RawArc, RawElement};
    ///
    /// let diagnostics = Diagnostics::new();
    /// let net = Net::from_raw(
    ///     vec![
    ///         RawElement::new("p1", "start", "place"),
    ///         RawElement::new("n1", "", "note"),
    ///         RawElement::new("t1", "", "xor-split"),
    ///     ],
    ///     vec![RawArc::new("a1", "p1", "t1"), RawArc::new("a2", "n1", "t1")],
    ///     &diagnostics,
    /// );
    ///
    /// assert_eq!(net.element_count(), 2);
    /// assert_eq!(net.arc_count(), 2);
    /// assert_eq!(diagnostics.warning_count(), 1);
    /// ```
    pub fn from_raw<E, A>(elements: E, arcs: A, diagnostics: &Diagnostics) -> Net
    where
        E: IntoIterator<Item = RawElement>,
        A: IntoIterator<Item = RawArc>,
    {
        let mut net = Net::new();

        for raw in elements {
            if raw.id.trim().is_empty() {
                skipped(
                    diagnostics,
                    &raw.id,
                    format!("element '{}' without identifier skipped", raw.name),
                );
                continue;
            }

            let Some(kind) = ElementKind::from_tag(&raw.kind) else {
                skipped(
                    diagnostics,
                    &raw.id,
                    format!("element {} has unknown kind '{}', skipped", raw.id, raw.kind),
                );
                continue;
            };

            if net.element_by_id(&raw.id).is_some() {
                skipped(
                    diagnostics,
                    &raw.id,
                    format!("duplicate element {} skipped", raw.id),
                );
                continue;
            }

            let name = if raw.name.trim().is_empty() {
                raw.id.clone()
            } else {
                raw.name
            };
            net.push_element(NetElement {
                id: raw.id,
                name,
                kind,
            });
        }

        for raw in arcs {
            if net.contains_arc_id(&raw.id) {
                let message = format!("duplicate arc {} skipped", raw.id);
                log::warn!("{message}");
                diagnostics.push(
                    Diagnostic::new(DiagnosticSeverity::Warning, DiagnosticCategory::Arc, message)
                        .with_element(raw.id),
                );
                continue;
            }
            net.push_arc(NetArc::new(raw.id, raw.source, raw.target));
        }

        log::debug!(
            "imported net with {} elements and {} arcs",
            net.element_count(),
            net.arc_count()
        );
        net
    }
}
