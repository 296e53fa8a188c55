//! Error adapter for converting DoccheckError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. Manifest
//! parse failures carry the manifest source text, so the adapter can point
//! at the offending byte with a labeled snippet.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use doccheck::DoccheckError;

/// Adapter for a manifest parse failure.
///
/// Wraps the path, the JSON error, and the manifest source text and
/// implements [`MietteDiagnostic`] to render a labeled snippet at the
/// position the JSON parser reported.
pub struct ManifestAdapter<'a> {
    path: &'a str,
    err: &'a serde_json::Error,
    src: &'a str,
}

impl<'a> ManifestAdapter<'a> {
    /// Create a new manifest adapter.
    pub fn new(path: &'a str, err: &'a serde_json::Error, src: &'a str) -> Self {
        Self { path, err, src }
    }
}

impl fmt::Debug for ManifestAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManifestAdapter")
            .field("path", &self.path)
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ManifestAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse manifest {}", self.path)
    }
}

impl std::error::Error for ManifestAdapter<'_> {}

impl MietteDiagnostic for ManifestAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("doccheck::manifest"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "the manifest must be a JSON object with `name` and `navigation` fields",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let offset = byte_offset(self.src, self.err.line(), self.err.column());
        let span = SourceSpan::new(offset.into(), 0);
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some(self.err.to_string()), span),
        )))
    }
}

/// Adapter for [`DoccheckError`] variants without source text.
pub struct ErrorAdapter<'a>(pub &'a DoccheckError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            DoccheckError::Io(_) => "doccheck::io",
            DoccheckError::ManifestMissing { .. } => "doccheck::manifest",
            DoccheckError::ManifestParse { .. } => return None,
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            DoccheckError::ManifestMissing { .. } => Some(Box::new(
                "the navigation manifest is expected at the documentation root",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A manifest parse failure with a source snippet.
    Manifest(ManifestAdapter<'a>),
    /// A simple error without source text.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Manifest(m) => fmt::Display::fmt(m, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Manifest(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Manifest(m) => m.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Manifest(m) => m.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Manifest(m) => m.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Manifest(m) => m.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`DoccheckError`] into a list of reportable errors.
pub fn to_reportables(err: &DoccheckError) -> Vec<Reportable<'_>> {
    match err {
        DoccheckError::ManifestParse { path, err, src } => {
            vec![Reportable::Manifest(ManifestAdapter::new(path, err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Convert a 1-based line/column position to a byte offset into `src`.
fn byte_offset(src: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (index, text) in src.split('\n').enumerate() {
        if index + 1 == line {
            return (offset + column.saturating_sub(1)).min(src.len());
        }
        offset += text.len() + 1;
    }
    src.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error(src: &str) -> serde_json::Error {
        serde_json::from_str::<doccheck::Manifest>(src).unwrap_err()
    }

    #[test]
    fn test_manifest_error_becomes_snippet_reportable() {
        let src = "{\n  \"name\": \"Docs\",\n  bad\n}";
        let err = DoccheckError::new_manifest_error("mint.json", parse_error(src), src);

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Manifest(m) => {
                assert_eq!(m.to_string(), "failed to parse manifest mint.json");
                assert!(m.source_code().is_some());
                let labels: Vec<_> = m.labels().unwrap().collect();
                assert_eq!(labels.len(), 1);
                assert!(labels[0].primary());
            }
            Reportable::Error(_) => panic!("Expected Manifest"),
        }
    }

    #[test]
    fn test_missing_manifest_is_plain_reportable() {
        let err = DoccheckError::ManifestMissing {
            path: "docs/mint.json".to_string(),
        };

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "manifest not found: docs/mint.json");
                assert!(e.source_code().is_none());
            }
            Reportable::Manifest(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_byte_offset_points_into_the_right_line() {
        let src = "first\nsecond\nthird";

        assert_eq!(byte_offset(src, 1, 1), 0);
        assert_eq!(byte_offset(src, 2, 1), 6);
        assert_eq!(byte_offset(src, 3, 3), 15);
        // Positions past the end clamp to the source length.
        assert_eq!(byte_offset(src, 9, 9), src.len());
    }
}
