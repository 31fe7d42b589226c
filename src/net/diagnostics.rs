//! Diagnostics collection for net import and structural analysis.
//!
//! Structural checks degrade gracefully: an arc that references an unknown element, an
//! element with an unrecognised kind or a connectivity check that cannot be anchored is
//! reported here and the analysis carries on with what it can interpret. The sink is
//! injected by the caller, so the library never depends on a process-wide logger to
//! surface these findings.
//!
//! # Key Components
//!
//! - [`Diagnostics`] - Shareable container for diagnostic entries
//! - [`Diagnostic`] - Individual diagnostic entry with severity and context
//! - [`DiagnosticSeverity`] - Severity level (Info, Warning, Error)
//! - [`DiagnosticCategory`] - Which part of the net or the analysis raised it
//!
//! # Usage Examples
//!
//! ```rust
//! use wfnet::net::{DiagnosticCategory, Diagnostics};
//! use std::sync::Arc;
//!
//! let diagnostics = Arc::new(Diagnostics::new());
//!
//! diagnostics.warning(DiagnosticCategory::Arc, "arc a7 references unknown element p9");
//! diagnostics.info(DiagnosticCategory::FreeChoice, "free-choice check disabled");
//!
//! assert!(diagnostics.has_warnings());
//! assert!(!diagnostics.has_errors());
//! assert_eq!(diagnostics.by_category(DiagnosticCategory::Arc).len(), 1);
//! ```
//!
//! # Thread Safety
//!
//! The [`Diagnostics`] container uses `boxcar::Vec` internally, which provides lock-free
//! append through a shared reference. One sink can be handed to several analyses.

use std::fmt::{self, Write};

/// Severity level of a diagnostic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    /// Informational message, not indicating a problem.
    ///
    /// Used for skipped checks and inconclusive results.
    Info,

    /// Something in the net could not be interpreted and was skipped.
    ///
    /// The analysis still produces a result, but it covers less of the net.
    Warning,

    /// The net is structurally broken in a way the analysis had to give up on.
    Error,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Info => write!(f, "INFO"),
            DiagnosticSeverity::Warning => write!(f, "WARN"),
            DiagnosticSeverity::Error => write!(f, "ERROR"),
        }
    }
}

/// Category indicating the source of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    /// Issues with individual elements.
    ///
    /// Examples: unknown kind tag, duplicate identifier on import.
    Element,

    /// Issues with arcs.
    ///
    /// Examples: arc endpoint not part of the net.
    Arc,

    /// Findings of the connectivity check.
    ///
    /// Examples: no unique source place, route calculation unavailable.
    Connectivity,

    /// Findings of the free-choice check.
    FreeChoice,

    /// Issues raised by the route calculator.
    Route,

    /// Anything not fitting the categories above.
    General,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Element => write!(f, "Element"),
            DiagnosticCategory::Arc => write!(f, "Arc"),
            DiagnosticCategory::Connectivity => write!(f, "Connectivity"),
            DiagnosticCategory::FreeChoice => write!(f, "FreeChoice"),
            DiagnosticCategory::Route => write!(f, "Route"),
            DiagnosticCategory::General => write!(f, "General"),
        }
    }
}

/// A single diagnostic entry.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level of this diagnostic.
    pub severity: DiagnosticSeverity,

    /// Category indicating the source of this diagnostic.
    pub category: DiagnosticCategory,

    /// Human-readable description of the issue.
    pub message: String,

    /// Identifier of the element or arc the diagnostic is about, if any.
    pub element: Option<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic entry.
    ///
    /// # Arguments
    ///
    /// * `severity` - Severity level of the diagnostic
    /// * `category` - Category of the diagnostic source
    /// * `message` - Human-readable description
    pub fn new(
        severity: DiagnosticSeverity,
        category: DiagnosticCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            element: None,
        }
    }

    /// Attaches the identifier of the affected element or arc.
    #[must_use]
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.category, self.message)?;

        if let Some(element) = &self.element {
            write!(f, " (element: {element})")?;
        }

        Ok(())
    }
}

/// Append-only container for diagnostic entries.
///
/// Entries are added through `&self`, so the container can be shared behind an
/// [`std::sync::Arc`] between the importer, the accessor and the analyses.
#[derive(Debug)]
pub struct Diagnostics {
    entries: boxcar::Vec<Diagnostic>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostics {
    /// Creates a new empty diagnostics container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: boxcar::Vec::new(),
        }
    }

    /// Adds an informational diagnostic.
    pub fn info(&self, category: DiagnosticCategory, message: impl Into<String>) {
        self.push(Diagnostic::new(DiagnosticSeverity::Info, category, message));
    }

    /// Adds a warning diagnostic.
    pub fn warning(&self, category: DiagnosticCategory, message: impl Into<String>) {
        self.push(Diagnostic::new(
            DiagnosticSeverity::Warning,
            category,
            message,
        ));
    }

    /// Adds an error diagnostic.
    pub fn error(&self, category: DiagnosticCategory, message: impl Into<String>) {
        self.push(Diagnostic::new(
            DiagnosticSeverity::Error,
            category,
            message,
        ));
    }

    /// Adds a diagnostic entry directly.
    ///
    /// Use this for diagnostics that carry an element identifier.
    pub fn push(&self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Returns true if any diagnostics have been collected.
    pub fn has_any(&self) -> bool {
        self.entries.count() > 0
    }

    /// Returns true if any error-level diagnostics have been collected.
    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, d)| d.severity == DiagnosticSeverity::Error)
    }

    /// Returns true if any warning-level diagnostics have been collected.
    pub fn has_warnings(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, d)| d.severity == DiagnosticSeverity::Warning)
    }

    /// Returns the total number of diagnostics.
    pub fn count(&self) -> usize {
        self.entries.count()
    }

    fn severity_count(&self, severity: DiagnosticSeverity) -> usize {
        self.entries
            .iter()
            .filter(|(_, d)| d.severity == severity)
            .count()
    }

    /// Returns the number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.severity_count(DiagnosticSeverity::Error)
    }

    /// Returns the number of warning-level diagnostics.
    pub fn warning_count(&self) -> usize {
        self.severity_count(DiagnosticSeverity::Warning)
    }

    /// Returns the number of info-level diagnostics.
    pub fn info_count(&self) -> usize {
        self.severity_count(DiagnosticSeverity::Info)
    }

    /// Returns an iterator over all diagnostics in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().map(|(_, d)| d)
    }

    /// Returns diagnostics filtered by category.
    pub fn by_category(&self, category: DiagnosticCategory) -> Vec<&Diagnostic> {
        self.iter().filter(|d| d.category == category).collect()
    }

    /// Returns all diagnostics attached to the given element identifier.
    pub fn for_element(&self, element: &str) -> Vec<&Diagnostic> {
        self.iter()
            .filter(|d| d.element.as_deref() == Some(element))
            .collect()
    }

    /// Formats a summary of all diagnostics for display.
    pub fn summary(&self) -> String {
        let mut output = String::new();

        let error_count = self.error_count();
        let warning_count = self.warning_count();
        let info_count = self.info_count();

        let _ = writeln!(
            output,
            "Diagnostics: {} error(s), {} warning(s), {} info(s)",
            error_count, warning_count, info_count
        );

        for (title, severity, count) in [
            ("Errors", DiagnosticSeverity::Error, error_count),
            ("Warnings", DiagnosticSeverity::Warning, warning_count),
        ] {
            if count == 0 {
                continue;
            }
            let _ = writeln!(output, "\n{title}:");
            for diag in self.iter().filter(|d| d.severity == severity) {
                let _ = writeln!(output, "  {diag}");
            }
        }

        output
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_diagnostic_with_element() {
        let diag = Diagnostic::new(
            DiagnosticSeverity::Warning,
            DiagnosticCategory::Arc,
            "dangling arc",
        );
        assert!(diag.element.is_none());

        let diag = diag.with_element("a3");
        assert_eq!(diag.element.as_deref(), Some("a3"));
        assert_eq!(diag.to_string(), "[WARN] Arc: dangling arc (element: a3)");
    }

    #[test]
    fn test_diagnostics_container() {
        let diagnostics = Diagnostics::new();
        assert!(!diagnostics.has_any());

        diagnostics.info(DiagnosticCategory::General, "Info message");
        diagnostics.warning(DiagnosticCategory::Arc, "Warning message");
        diagnostics.error(DiagnosticCategory::Connectivity, "Error message");

        assert_eq!(diagnostics.count(), 3);
        assert_eq!(diagnostics.error_count(), 1);
        assert_eq!(diagnostics.warning_count(), 1);
        assert_eq!(diagnostics.info_count(), 1);
        assert!(diagnostics.has_errors());
        assert!(diagnostics.has_warnings());
        assert!(diagnostics.has_any());
    }

    #[test]
    fn test_diagnostics_shared_between_threads() {
        let diagnostics = Arc::new(Diagnostics::new());
        let mut handles = vec![];

        for i in 0..8 {
            let diag_clone = Arc::clone(&diagnostics);
            handles.push(thread::spawn(move || {
                diag_clone.warning(DiagnosticCategory::Element, format!("element {i}"));
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(diagnostics.count(), 8);
    }

    #[test]
    fn test_diagnostics_filters() {
        let diagnostics = Diagnostics::new();
        diagnostics.push(
            Diagnostic::new(DiagnosticSeverity::Warning, DiagnosticCategory::Arc, "a")
                .with_element("a1"),
        );
        diagnostics.push(
            Diagnostic::new(DiagnosticSeverity::Warning, DiagnosticCategory::Arc, "b")
                .with_element("a2"),
        );
        diagnostics.info(DiagnosticCategory::FreeChoice, "c");

        assert_eq!(diagnostics.by_category(DiagnosticCategory::Arc).len(), 2);
        assert_eq!(diagnostics.by_category(DiagnosticCategory::Route).len(), 0);
        assert_eq!(diagnostics.for_element("a2").len(), 1);
        assert!(diagnostics.for_element("p1").is_empty());
    }

    #[test]
    fn test_summary_lists_warnings() {
        let diagnostics = Diagnostics::new();
        diagnostics.warning(DiagnosticCategory::Element, "unknown kind 'subprocess'");

        let summary = diagnostics.summary();
        assert!(summary.starts_with("Diagnostics: 0 error(s), 1 warning(s), 0 info(s)"));
        assert!(summary.contains("Warnings:"));
        assert!(summary.contains("unknown kind 'subprocess'"));
        assert!(!summary.contains("Errors:"));
    }
}
