//! Link model and classification.
//!
//! A [`Link`] is a raw target string extracted from a page body, either
//! from inline markdown syntax or from an `href` attribute. Classification
//! into external and internal links is lexical: scheme prefixes and
//! in-page anchors are external, everything else is internal and subject
//! to resolution against the content tree.

/// The syntax a link was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSyntax {
    /// Inline markdown syntax: `[text](target)`.
    Inline,
    /// Attribute syntax: `href="target"` or `href='target'`.
    HrefAttribute,
}

/// A raw link target extracted from a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    target: String,
    syntax: LinkSyntax,
    /// 1-based line number within the page body.
    line: usize,
}

impl Link {
    /// Creates a new link.
    pub fn new(target: impl Into<String>, syntax: LinkSyntax, line: usize) -> Self {
        Self {
            target: target.into(),
            syntax,
            line,
        }
    }

    /// Returns the raw target string.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the syntax the link was extracted from.
    pub fn syntax(&self) -> LinkSyntax {
        self.syntax
    }

    /// Returns the 1-based line number of the link.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns `true` for scheme-prefixed and anchor-only targets.
    ///
    /// External links are never resolved against the content tree.
    pub fn is_external(&self) -> bool {
        self.target.starts_with("http://")
            || self.target.starts_with("https://")
            || self.target.starts_with("mailto:")
            || self.target.starts_with('#')
    }

    /// Returns the target with any query string and anchor fragment removed.
    pub fn clean_target(&self) -> &str {
        let target = &self.target;
        let end = target
            .find(['?', '#'])
            .unwrap_or(target.len());
        &target[..end]
    }
}
