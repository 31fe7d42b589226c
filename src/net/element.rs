//! Net elements and their classification.
//!
//! Every element of a workflow net is either a place or a transition. Operator
//! transitions (the AND/XOR split and join shorthands of workflow modelling) are a
//! presentation refinement of transitions: they carry an [`OperatorKind`] but are
//! transitions for every structural check. [`NodeKind`] is the closed two-way view the
//! analyses work with, so no analysis ever has to test for operator variants.

use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

/// Split/join behaviour of an operator transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum OperatorKind {
    /// Fires all outgoing branches
    AndSplit,
    /// Waits for all incoming branches
    AndJoin,
    /// AND-join followed by AND-split
    AndSplitJoin,
    /// Chooses exactly one outgoing branch
    XorSplit,
    /// Continues on any one incoming branch
    XorJoin,
    /// XOR-join followed by XOR-split
    XorSplitJoin,
    /// AND-join followed by XOR-split
    AndJoinXorSplit,
    /// XOR-join followed by AND-split
    XorJoinAndSplit,
}

impl OperatorKind {
    /// Returns the textual tag used by importers for this operator.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            OperatorKind::AndSplit => "and-split",
            OperatorKind::AndJoin => "and-join",
            OperatorKind::AndSplitJoin => "and-split-join",
            OperatorKind::XorSplit => "xor-split",
            OperatorKind::XorJoin => "xor-join",
            OperatorKind::XorSplitJoin => "xor-split-join",
            OperatorKind::AndJoinXorSplit => "and-join-xor-split",
            OperatorKind::XorJoinAndSplit => "xor-join-and-split",
        }
    }

    /// Looks up an operator by its tag, ignoring ASCII case.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        OperatorKind::iter().find(|kind| kind.tag().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Kind of a net element as stored in the net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A place (holds tokens)
    Place,
    /// A simple transition
    Transition,
    /// An operator transition
    Operator(OperatorKind),
}

impl ElementKind {
    /// Parses an element kind tag: `place`, `transition` or one of the operator tags.
    ///
    /// Returns `None` for anything else; importers skip such elements.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case("place") {
            Some(ElementKind::Place)
        } else if tag.eq_ignore_ascii_case("transition") {
            Some(ElementKind::Transition)
        } else {
            OperatorKind::from_tag(tag).map(ElementKind::Operator)
        }
    }

    /// Structural classification of this kind.
    #[must_use]
    pub fn node_kind(self) -> NodeKind {
        match self {
            ElementKind::Place => NodeKind::Place,
            ElementKind::Transition | ElementKind::Operator(_) => NodeKind::Transition,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Place => f.write_str("place"),
            ElementKind::Transition => f.write_str("transition"),
            ElementKind::Operator(kind) => write!(f, "{kind}"),
        }
    }
}

/// The two node kinds of a workflow net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    /// A place
    Place,
    /// A transition, simple or operator
    Transition,
}

/// A place or transition of a [`crate::net::Net`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetElement {
    /// Unique identifier within the net
    pub id: String,
    /// Display name; defaults to the identifier
    pub name: String,
    /// Kind of the element
    pub kind: ElementKind,
}

impl NetElement {
    /// Structural classification of this element.
    #[must_use]
    pub fn node_kind(&self) -> NodeKind {
        self.kind.node_kind()
    }

    /// Returns true for places.
    #[must_use]
    pub fn is_place(&self) -> bool {
        self.node_kind() == NodeKind::Place
    }

    /// Returns true for simple and operator transitions.
    #[must_use]
    pub fn is_transition(&self) -> bool {
        self.node_kind() == NodeKind::Transition
    }
}

impl fmt::Display for NetElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name == self.id {
            write!(f, "{} {}", self.kind, self.id)
        } else {
            write!(f, "{} {} ({})", self.kind, self.id, self.name)
        }
    }
}

/// Description of an element to create with [`crate::net::Net::create_element`].
///
/// # Examples
///
/// ```rust
/// use wfnet::net::{ElementKind, ElementSpec, OperatorKind};
///
/// let spec = ElementSpec::operator("t3", OperatorKind::XorSplit).with_name("decide");
/// assert_eq!(spec.kind, ElementKind::Operator(OperatorKind::XorSplit));
/// assert_eq!(spec.name.as_deref(), Some("decide"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpec {
    /// Identifier of the new element
    pub id: String,
    /// Optional display name
    pub name: Option<String>,
    /// Kind of the new element
    pub kind: ElementKind,
}

impl ElementSpec {
    /// Creates a spec for an element of the given kind.
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        ElementSpec {
            id: id.into(),
            name: None,
            kind,
        }
    }

    /// Creates a spec for a place.
    pub fn place(id: impl Into<String>) -> Self {
        Self::new(id, ElementKind::Place)
    }

    /// Creates a spec for a simple transition.
    pub fn transition(id: impl Into<String>) -> Self {
        Self::new(id, ElementKind::Transition)
    }

    /// Creates a spec for an operator transition.
    pub fn operator(id: impl Into<String>, operator: OperatorKind) -> Self {
        Self::new(id, ElementKind::Operator(operator))
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub(crate) fn into_element(self) -> NetElement {
        let name = self.name.unwrap_or_else(|| self.id.clone());
        NetElement {
            id: self.id,
            name,
            kind: self.kind,
        }
    }
}
