//! The code-block language allow-list.
//!
//! Code blocks must declare a language tag drawn from a fixed set of
//! recognized identifiers so the site renderer can apply syntax
//! highlighting. Matching is case-insensitive.

/// Recognized code-block language tags.
pub const ALLOWED_LANGUAGES: &[&str] = &[
    "bash",
    "sh",
    "shell",
    "javascript",
    "js",
    "typescript",
    "ts",
    "python",
    "py",
    "go",
    "golang",
    "java",
    "csharp",
    "cs",
    "c#",
    "yaml",
    "yml",
    "json",
    "protobuf",
    "proto",
    "dockerfile",
    "sql",
    "html",
    "xml",
    "css",
    "scss",
    "markdown",
    "md",
    "text",
    "txt",
    "diff",
];

/// Returns `true` when `tag` is a member of the allow-list.
///
/// The comparison is case-insensitive; surrounding whitespace is not
/// tolerated.
pub fn is_recognized(tag: &str) -> bool {
    ALLOWED_LANGUAGES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(tag))
}
