//! Findings and the validation report.
//!
//! A [`Finding`] is a single validation outcome: a severity, the check
//! that produced it, and a message, optionally tied to a page and a line.
//! Checks emit findings into a [`FindingCollector`], which is finished
//! into a [`Report`] once every selected check has run.

use std::fmt;

use doccheck_core::Severity;

/// A single validation finding.
///
/// # Example
///
/// ```
/// # use doccheck::Finding;
/// let finding = Finding::error("frontmatter", "missing title field")
///     .with_page("guide/intro.mdx");
///
/// assert!(finding.severity().is_error());
/// assert_eq!(finding.to_string(), "error: guide/intro.mdx: missing title field");
/// ```
#[derive(Debug, Clone)]
pub struct Finding {
    severity: Severity,
    check: &'static str,
    message: String,
    page: Option<String>,
    line: Option<usize>,
}

impl Finding {
    /// Create an error finding.
    pub fn error(check: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, check, message)
    }

    /// Create a warning finding.
    pub fn warning(check: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, check, message)
    }

    /// Get the severity of this finding.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the name of the check that produced this finding.
    pub fn check(&self) -> &'static str {
        self.check
    }

    /// Get the finding message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the page this finding is about, if any.
    pub fn page(&self) -> Option<&str> {
        self.page.as_deref()
    }

    /// Get the 1-based line number within the page, if any.
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Attach the page this finding is about.
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Attach a 1-based line number within the page.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    fn new(severity: Severity, check: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            check,
            message: message.into(),
            page: None,
            line: None,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error: page.mdx:12: message" with page and line optional.
        write!(f, "{}: ", self.severity)?;
        if let Some(page) = &self.page {
            write!(f, "{page}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
            write!(f, ": ")?;
        }
        write!(f, "{}", self.message)
    }
}

/// A collector for accumulating findings while checks run.
///
/// Every selected check runs to completion; errors never short-circuit
/// the run. The collector only tallies.
#[derive(Debug, Default)]
pub struct FindingCollector {
    findings: Vec<Finding>,
}

impl FindingCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a finding to this collector.
    pub fn emit(&mut self, finding: Finding) {
        log::debug!(check = finding.check(), severity:% = finding.severity();
            "{}", finding.message());
        self.findings.push(finding);
    }

    /// Finish collection and produce the report.
    pub fn finish(self) -> Report {
        Report {
            findings: self.findings,
        }
    }
}

/// The outcome of a validation run: every finding, in emission order.
#[derive(Debug)]
pub struct Report {
    findings: Vec<Finding>,
}

impl Report {
    /// Returns the findings in emission order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Returns the number of error findings.
    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity().is_error())
            .count()
    }

    /// Returns the number of warning findings.
    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity().is_warning())
            .count()
    }

    /// Returns `true` when the report contains at least one error.
    pub fn has_errors(&self) -> bool {
        self.findings
            .iter()
            .any(|finding| finding.severity().is_error())
    }
}
