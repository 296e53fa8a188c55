//! Error types for doccheck operations.
//!
//! This module provides the main error type [`DoccheckError`] for fatal
//! conditions. Validation outcomes are not errors: they are findings,
//! collected in a [`Report`](crate::Report) while the run continues. Only
//! conditions that make further checking meaningless (an unreadable root,
//! a manifest that fails to parse) surface here.

use std::io;

use thiserror::Error;

/// The main error type for doccheck operations.
///
/// The `Manifest` variant carries the manifest source text alongside the
/// underlying JSON error so the CLI can render a labeled snippet.
#[derive(Debug, Error)]
pub enum DoccheckError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("manifest not found: {path}")]
    ManifestMissing { path: String },

    #[error("failed to parse manifest {path}: {err}")]
    ManifestParse {
        path: String,
        err: serde_json::Error,
        src: String,
    },
}

impl DoccheckError {
    /// Create a new `ManifestParse` error with the associated source text.
    pub fn new_manifest_error(
        path: impl Into<String>,
        err: serde_json::Error,
        src: impl Into<String>,
    ) -> Self {
        Self::ManifestParse {
            path: path.into(),
            err,
            src: src.into(),
        }
    }
}
