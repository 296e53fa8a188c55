//! Content page model.
//!
//! A [`Page`] is one content file of the documentation corpus: a relative
//! path, a flat frontmatter map, and the body text that follows the
//! frontmatter block.

use indexmap::IndexMap;

/// A single content page of the documentation corpus.
///
/// Pages are identified by their path relative to the content root, using
/// forward slashes regardless of platform. The frontmatter map preserves
/// the order in which keys appear in the file.
#[derive(Debug, Clone)]
pub struct Page {
    /// Path relative to the content root, `/`-separated.
    path: String,

    /// Flat `key: value` frontmatter fields, in file order.
    frontmatter: IndexMap<String, String>,

    /// Body text following the frontmatter block. When the page has no
    /// frontmatter this is the whole file.
    body: String,

    /// Whether the file started with the frontmatter delimiter.
    has_frontmatter: bool,
}

impl Page {
    /// Creates a new page.
    pub fn new(
        path: impl Into<String>,
        frontmatter: IndexMap<String, String>,
        body: impl Into<String>,
        has_frontmatter: bool,
    ) -> Self {
        Self {
            path: path.into(),
            frontmatter,
            body: body.into(),
            has_frontmatter,
        }
    }

    /// Returns the page path relative to the content root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the directory portion of the page path, or `""` for
    /// top-level pages.
    pub fn dir(&self) -> &str {
        match self.path.rfind('/') {
            Some(idx) => &self.path[..idx],
            None => "",
        }
    }

    /// Returns the frontmatter fields in file order.
    pub fn frontmatter(&self) -> &IndexMap<String, String> {
        &self.frontmatter
    }

    /// Returns a frontmatter field value, trimmed, or `None` when the field
    /// is absent or empty.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.frontmatter
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Returns the body text following the frontmatter block.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` when the file started with the frontmatter delimiter.
    pub fn has_frontmatter(&self) -> bool {
        self.has_frontmatter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with(fields: &[(&str, &str)]) -> Page {
        let frontmatter = fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Page::new("guide/intro", frontmatter, "body", true)
    }

    #[test]
    fn test_field_present() {
        let page = page_with(&[("title", "Intro")]);
        assert_eq!(page.field("title"), Some("Intro"));
    }

    #[test]
    fn test_field_absent_or_blank() {
        let page = page_with(&[("description", "   ")]);
        assert_eq!(page.field("description"), None);
        assert_eq!(page.field("title"), None);
    }

    #[test]
    fn test_dir_of_nested_page() {
        let page = page_with(&[]);
        assert_eq!(page.dir(), "guide");
    }

    #[test]
    fn test_dir_of_top_level_page() {
        let page = Page::new("index", IndexMap::new(), "", false);
        assert_eq!(page.dir(), "");
    }
}
