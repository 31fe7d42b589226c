use std::fmt;

/// A directed arc between two net elements, referenced by identifier.
///
/// Arcs created through [`crate::net::Net::create_arc`] always connect an existing place
/// with an existing transition. Arcs read by [`crate::net::Net::from_raw`] are stored as
/// given and may reference elements the net does not contain; the analysis accessor
/// reports and skips those.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetArc {
    /// Unique identifier within the net
    pub id: String,
    /// Identifier of the element the arc starts at
    pub source: String,
    /// Identifier of the element the arc ends at
    pub target: String,
}

impl NetArc {
    /// Creates a new arc.
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        NetArc {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    /// Returns true if the arc starts or ends at `element`.
    #[must_use]
    pub fn touches(&self, element: &str) -> bool {
        self.source == element || self.target == element
    }
}

impl fmt::Display for NetArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.id, self.source, self.target)
    }
}
