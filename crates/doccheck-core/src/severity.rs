//! Severity levels for findings.
//!
//! This module defines the severity of validation findings, distinguishing
//! between structural errors and advisory warnings.

use std::fmt;

/// The severity level of a finding.
///
/// Severity determines how the finding affects the run:
/// - [`Severity::Error`] indicates a structural issue that fails the run
/// - [`Severity::Warning`] indicates an advisory issue that never affects
///   the exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A structural error that causes a non-zero exit status.
    ///
    /// Errors must be fixed before the documentation tree is considered
    /// valid.
    Error,

    /// A non-fatal warning about potential issues.
    ///
    /// Warnings are reported for diagnostic value but do not change the
    /// outcome of a run.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
