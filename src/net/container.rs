//! The net container.
//!
//! [`Net`] owns the elements and arcs of one workflow net. It is the editing surface
//! consumed by the analyses: they read it through [`crate::analysis::NetGraph`] and never
//! modify it. Any edit invalidates analysis results, so callers build a fresh
//! [`crate::analysis::StructuralAnalysis`] after changing the net.

use std::collections::{HashMap, HashSet};

use crate::{
    net::{ElementSpec, NetArc, NetElement},
    Error, Result,
};

/// One entry of [`Net::root_elements`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootElement<'a> {
    /// A place or transition
    Element(&'a NetElement),
    /// An arc
    Arc(&'a NetArc),
}

/// A workflow net: places, transitions and the arcs between them.
///
/// Elements keep their insertion order; the analyses report results in that order.
///
/// # Examples
///
/// ```rust
/// use wfnet::net::{ElementSpec, Net};
///
/// let mut net = Net::new();
/// net.create_element(ElementSpec::place("p1"))?;
/// net.create_element(ElementSpec::transition("t1"))?;
/// net.create_arc("p1", "t1")?;
///
/// assert_eq!(net.element_count(), 2);
/// assert_eq!(net.arc_count(), 1);
/// assert!(net.create_arc("p1", "p1").is_err());
/// # Ok::<(), wfnet::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Net {
    elements: Vec<NetElement>,
    index: HashMap<String, usize>,
    arcs: Vec<NetArc>,
    arc_ids: HashSet<String>,
    next_arc: usize,
}

impl Net {
    /// Creates an empty net.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over all elements followed by all arcs.
    pub fn root_elements(&self) -> impl Iterator<Item = RootElement<'_>> {
        self.elements
            .iter()
            .map(RootElement::Element)
            .chain(self.arcs.iter().map(RootElement::Arc))
    }

    /// All places and transitions in insertion order.
    #[must_use]
    pub fn elements(&self) -> &[NetElement] {
        &self.elements
    }

    /// Number of places and transitions.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the net has neither elements nor arcs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.arcs.is_empty()
    }

    /// Looks up an element by identifier.
    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<&NetElement> {
        self.index.get(id).map(|&position| &self.elements[position])
    }

    /// Position of an element in [`Net::elements`].
    pub(crate) fn position_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// All arcs in insertion order.
    #[must_use]
    pub fn arcs(&self) -> &[NetArc] {
        &self.arcs
    }

    /// Number of arcs.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Adds a new element.
    ///
    /// # Errors
    ///
    /// - [`Error::Empty`] if the identifier is empty or whitespace
    /// - [`Error::DuplicateElement`] if the identifier is already in use
    pub fn create_element(&mut self, spec: ElementSpec) -> Result<&NetElement> {
        if spec.id.trim().is_empty() {
            return Err(Error::Empty);
        }
        if self.index.contains_key(&spec.id) {
            return Err(Error::DuplicateElement(spec.id));
        }

        Ok(self.push_element(spec.into_element()))
    }

    /// Adds an arc from `from` to `to` with a generated identifier.
    ///
    /// # Errors
    ///
    /// - [`Error::ElementNotFound`] if either endpoint does not exist
    /// - [`Error::InvalidArc`] if both endpoints are places or both are transitions
    pub fn create_arc(&mut self, from: &str, to: &str) -> Result<&NetArc> {
        let source = self
            .element_by_id(from)
            .ok_or_else(|| Error::ElementNotFound(from.to_string()))?;
        let target = self
            .element_by_id(to)
            .ok_or_else(|| Error::ElementNotFound(to.to_string()))?;

        if source.node_kind() == target.node_kind() {
            let reason = if source.is_place() {
                "both endpoints are places"
            } else {
                "both endpoints are transitions"
            };
            return Err(Error::InvalidArc {
                from: from.to_string(),
                to: to.to_string(),
                reason: reason.to_string(),
            });
        }

        let id = self.next_arc_id();
        Ok(self.push_arc(NetArc::new(id, from, to)))
    }

    /// Removes an element together with every arc that starts or ends at it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementNotFound`] if no element has this identifier.
    pub fn remove_element(&mut self, id: &str) -> Result<NetElement> {
        let position = self
            .index
            .remove(id)
            .ok_or_else(|| Error::ElementNotFound(id.to_string()))?;

        let removed = self.elements.remove(position);
        for (shifted, element) in self.elements.iter().enumerate().skip(position) {
            self.index.insert(element.id.clone(), shifted);
        }

        let arc_ids = &mut self.arc_ids;
        self.arcs.retain(|arc| {
            let keep = !arc.touches(id);
            if !keep {
                arc_ids.remove(&arc.id);
            }
            keep
        });

        Ok(removed)
    }

    /// Appends an element without validation; callers check for duplicates.
    pub(crate) fn push_element(&mut self, element: NetElement) -> &NetElement {
        let position = self.elements.len();
        self.index.insert(element.id.clone(), position);
        self.elements.push(element);
        &self.elements[position]
    }

    /// Appends an arc without validating its endpoints.
    pub(crate) fn push_arc(&mut self, arc: NetArc) -> &NetArc {
        let position = self.arcs.len();
        self.arc_ids.insert(arc.id.clone());
        self.arcs.push(arc);
        &self.arcs[position]
    }

    pub(crate) fn contains_arc_id(&self, id: &str) -> bool {
        self.arc_ids.contains(id)
    }

    fn next_arc_id(&mut self) -> String {
        loop {
            self.next_arc += 1;
            let id = format!("a{}", self.next_arc);
            if !self.arc_ids.contains(&id) {
                return id;
            }
        }
    }
}
