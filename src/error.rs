use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Errors are only produced by operations that edit a [`crate::net::Net`] or that are
/// explicitly configured to be strict. The structural analyses themselves degrade gracefully:
/// malformed input is reported through [`crate::net::Diagnostics`] and skipped, and
/// analyses that cannot reach a verdict report an inconclusive result instead of an error.
///
/// # Error Categories
///
/// ## Net Construction Errors
/// - [`Error::DuplicateElement`] - An element with the same identifier already exists
/// - [`Error::ElementNotFound`] - A referenced element does not exist
/// - [`Error::InvalidArc`] - An arc would violate the bipartite structure of the net
///
/// ## Analysis Errors
/// - [`Error::Malformed`] - The net contains structure the analysis cannot interpret
/// - [`Error::GraphError`] - A graph operation referenced a node or edge that does not exist
/// - [`Error::Empty`] - An operation required a non-empty input
///
/// # Examples
///
/// ```rust
/// use wfnet::{Error, net::{ElementSpec, Net}};
///
/// let mut net = Net::new();
/// net.create_element(ElementSpec::place("p1"))?;
///
/// match net.create_element(ElementSpec::transition("p1")) {
///     Err(Error::DuplicateElement(id)) => assert_eq!(id, "p1"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// # Ok::<(), wfnet::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The net is damaged and could not be analyzed.
    ///
    /// Raised in strict mode when an arc references an element that is not part of
    /// the net. The error includes the source location where the malformation was
    /// detected for debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An element with this identifier already exists in the net.
    #[error("Element '{0}' already exists")]
    DuplicateElement(String),

    /// No element with this identifier exists in the net.
    #[error("Element '{0}' not found")]
    ElementNotFound(String),

    /// The arc could not be created.
    ///
    /// Workflow nets are bipartite: arcs connect a place with a transition, never two
    /// nodes of the same kind.
    #[error("Invalid arc {from} -> {to}: {reason}")]
    InvalidArc {
        /// Identifier of the element the arc starts at
        from: String,
        /// Identifier of the element the arc ends at
        to: String,
        /// Why the arc was rejected
        reason: String,
    },

    /// Graph operation error.
    ///
    /// Raised when a graph operation references a node or edge that does not exist,
    /// for instance when a route table is requested for a node outside the graph.
    #[error("{0}")]
    GraphError(String),

    /// Provided input was empty.
    #[error("Provided input was empty")]
    Empty,
}
