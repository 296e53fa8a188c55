//! Fenced code block model.

/// The language tag used to mark diagram blocks.
pub const DIAGRAM_LANGUAGE: &str = "mermaid";

/// A fenced code block extracted from a page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Declared language tag, if any, exactly as written after the fence.
    language: Option<String>,

    /// Literal body between the opening and closing fence.
    body: String,

    /// 1-based line number of the opening fence within the page body.
    line: usize,
}

impl CodeBlock {
    /// Creates a new code block.
    pub fn new(language: Option<String>, body: impl Into<String>, line: usize) -> Self {
        Self {
            language,
            body: body.into(),
            line,
        }
    }

    /// Returns the declared language tag, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Returns the literal block body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the 1-based line number of the opening fence.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns `true` when this block is tagged with the diagram language.
    ///
    /// The comparison is case-insensitive.
    pub fn is_diagram(&self) -> bool {
        self.language
            .as_deref()
            .is_some_and(|tag| tag.eq_ignore_ascii_case(DIAGRAM_LANGUAGE))
    }
}
