//! Configuration for the structural analysis.
//!
//! Selects which checks run and how malformed input is treated.

/// Configuration for [`crate::analysis::StructuralAnalysis`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Run the weak and strong connectivity check (default: true).
    ///
    /// When disabled, connectivity queries report
    /// [`crate::analysis::Inconclusive::Disabled`].
    pub check_connectivity: bool,

    /// Run the free-choice check (default: true).
    ///
    /// When disabled, no violation groups are reported.
    pub check_free_choice: bool,

    /// Reject nets with dangling arcs (default: false).
    ///
    /// In lenient mode arcs referencing unknown elements are reported to the diagnostics
    /// sink and skipped. In strict mode building the analysis fails with
    /// [`crate::Error::Malformed`].
    pub strict: bool,

    /// Label of the synthetic transition closing the net (default: `t*`). Shown in the
    /// inconclusive connectivity diagnostic and on the analyzed connectivity report node.
    pub bridge_label: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            check_connectivity: true,
            check_free_choice: true,
            strict: false,
            bridge_label: "t*".to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a configuration with all checks enabled in lenient mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with all checks enabled that rejects dangling arcs.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Creates a configuration that only collects basic net information.
    #[must_use]
    pub fn basic_only() -> Self {
        Self {
            check_connectivity: false,
            check_free_choice: false,
            ..Self::default()
        }
    }

    /// Enables or disables the connectivity check.
    #[must_use]
    pub fn with_connectivity(mut self, enabled: bool) -> Self {
        self.check_connectivity = enabled;
        self
    }

    /// Enables or disables the free-choice check.
    #[must_use]
    pub fn with_free_choice(mut self, enabled: bool) -> Self {
        self.check_free_choice = enabled;
        self
    }

    /// Enables or disables strict handling of dangling arcs.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the label of the synthetic bridge transition.
    #[must_use]
    pub fn with_bridge_label(mut self, label: impl Into<String>) -> Self {
        self.bridge_label = label.into();
        self
    }

    /// Returns true if any check beyond basic net information is enabled.
    #[must_use]
    pub fn any_check_enabled(&self) -> bool {
        self.check_connectivity || self.check_free_choice
    }
}
