//! Link extraction.
//!
//! Two independent passes over the page text: one for inline markdown
//! links (`[text](target)`) and one for `href` attributes
//! (`href="target"` / `href='target'`). The results are concatenated,
//! inline pass first; within a pass, links appear in document order.

use winnow::{
    Parser as _,
    error::{ContextError, ErrMode},
    token::{one_of, take_till},
};

use doccheck_core::{Link, LinkSyntax};

type PResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// Extract all link targets from a page body.
pub fn extract_links(text: &str) -> Vec<Link> {
    let mut links = scan(text, LinkSyntax::Inline, inline_link);
    links.extend(scan(text, LinkSyntax::HrefAttribute, href_attr));
    links
}

/// Inline markdown link: `[text](target)`.
///
/// The text part may span lines but must not contain `]`; the target
/// must not contain `)`. Both must be non-empty.
fn inline_link(input: &mut &str) -> PResult<String> {
    let _ = '['.parse_next(input)?;
    let _ = take_till(1.., ']').parse_next(input)?;
    let _ = ']'.parse_next(input)?;
    let _ = '('.parse_next(input)?;
    let target = take_till(1.., ')').parse_next(input)?;
    let _ = ')'.parse_next(input)?;
    Ok(target.to_string())
}

/// Attribute link: `href="target"` or `href='target'`.
///
/// Quote characters of either kind terminate the target, so a mismatched
/// closing quote is tolerated.
fn href_attr(input: &mut &str) -> PResult<String> {
    let _ = "href=".parse_next(input)?;
    let _ = one_of(['"', '\'']).parse_next(input)?;
    let target = take_till(1.., ['"', '\'']).parse_next(input)?;
    let _ = one_of(['"', '\'']).parse_next(input)?;
    Ok(target.to_string())
}

/// Run `parser` at every position of `text`, collecting matches in
/// document order. On failure the scanner advances one character.
fn scan(
    text: &str,
    syntax: LinkSyntax,
    parser: fn(&mut &str) -> PResult<String>,
) -> Vec<Link> {
    let mut out = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let offset = text.len() - rest.len();
        let mut attempt = rest;

        match parser(&mut attempt) {
            Ok(target) => {
                let line = 1 + text[..offset].matches('\n').count();
                out.push(Link::new(target, syntax, line));
                rest = attempt;
            }
            Err(_) => {
                let mut chars = rest.chars();
                chars.next();
                rest = chars.as_str();
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(text: &str) -> Vec<String> {
        extract_links(text)
            .into_iter()
            .map(|link| link.target().to_string())
            .collect()
    }

    #[test]
    fn test_inline_link() {
        assert_eq!(targets("See [the guide](/guide/intro)."), vec!["/guide/intro"]);
    }

    #[test]
    fn test_href_double_and_single_quotes() {
        let text = r#"<Card href="/a" /> <Card href='/b' />"#;
        assert_eq!(targets(text), vec!["/a", "/b"]);
    }

    #[test]
    fn test_passes_are_concatenated_inline_first() {
        let text = "prefix <Card href=\"/attr\" /> then [x](/inline)";
        let links = extract_links(text);

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].target(), "/inline");
        assert_eq!(links[0].syntax(), LinkSyntax::Inline);
        assert_eq!(links[1].target(), "/attr");
        assert_eq!(links[1].syntax(), LinkSyntax::HrefAttribute);
    }

    #[test]
    fn test_document_order_within_a_pass() {
        let text = "[a](/one) mid [b](/two)\n[c](/three)";
        assert_eq!(targets(text), vec!["/one", "/two", "/three"]);
    }

    #[test]
    fn test_line_numbers() {
        let text = "line one\n[a](/x)\n\n[b](/y)\n";
        let links = extract_links(text);

        assert_eq!(links[0].line(), 2);
        assert_eq!(links[1].line(), 4);
    }

    #[test]
    fn test_empty_text_or_target_is_no_link() {
        assert!(targets("[](/empty-text)").is_empty());
        assert!(targets("[text]()").is_empty());
    }

    #[test]
    fn test_unclosed_syntax_is_no_link() {
        assert!(targets("[text](/unclosed").is_empty());
        assert!(targets("href=\"/unclosed").is_empty());
    }

    #[test]
    fn test_image_syntax_also_matches() {
        // `![alt](src)` contains a well-formed inline link; images are
        // treated identically.
        assert_eq!(targets("![logo](/images/logo.png)"), vec!["/images/logo.png"]);
    }

    #[test]
    fn test_external_links_extracted_verbatim() {
        let text = "[ext](https://example.com/a?q=1#frag)";
        let links = extract_links(text);

        assert_eq!(links[0].target(), "https://example.com/a?q=1#frag");
        assert!(links[0].is_external());
    }
}
