//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by discovery and extraction.
//! Every query that takes a generated selector goes through the `try_`
//! variants so a malformed class fragment resolves to "no element" instead of
//! panicking inside the CSS parser.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

// === Attribute Operations ===

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string().to_ascii_lowercase())
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Tree Navigation ===

/// Get parent element
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Get direct element children
#[inline]
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.children()
}

/// Walk up exactly `depth` parent levels.
///
/// Returns `None` when the chain runs out before reaching `depth`.
#[must_use]
pub fn ancestor<'a>(sel: &Selection<'a>, depth: usize) -> Option<Selection<'a>> {
    let mut current = sel.clone();
    for _ in 0..depth {
        current = parent(&current);
        if !current.exists() {
            return None;
        }
    }
    Some(current)
}

// === Querying ===

/// First element matching `selector` under `sel`, if any.
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    sel.try_select(selector).map(|found| found.first())
}

/// All elements matching `selector` under `sel`, in document order.
///
/// Empty when nothing matches or the selector does not parse.
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    sel.try_select(selector)
        .map(|found| found.nodes().iter().map(|node| Selection::from(*node)).collect())
        .unwrap_or_default()
}

/// First element matching `selector` anywhere in the document.
#[must_use]
pub fn document_query<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    doc.try_select(selector).map(|found| found.first())
}

/// All elements matching `selector` anywhere in the document.
#[must_use]
pub fn document_query_all<'a>(doc: &'a Document, selector: &str) -> Vec<Selection<'a>> {
    doc.try_select(selector)
        .map(|found| found.nodes().iter().map(|node| Selection::from(*node)).collect())
        .unwrap_or_default()
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_select() {
        let doc = parse(r#"<div id="main" class="container">content</div>"#);
        let div = doc.select("div");

        assert_eq!(class_name(&div), Some("container".to_string()));
        assert_eq!(get_attribute(&div, "id"), Some("main".to_string()));
        assert!(has_attribute(&div, "id"));
    }

    #[test]
    fn test_missing_attributes_return_none() {
        let doc = parse(r#"<div>no attributes</div>"#);
        let div = doc.select("div");

        assert_eq!(class_name(&div), None);
        assert_eq!(get_attribute(&div, "data-test"), None);
        assert!(!has_attribute(&div, "title"));
    }

    #[test]
    fn test_tag_name() {
        let doc = parse(r#"<article><section>content</section></article>"#);

        assert_eq!(tag_name(&doc.select("article")), Some("article".to_string()));
        assert_eq!(tag_name(&doc.select("section")), Some("section".to_string()));
    }

    #[test]
    fn test_ancestor_walks_exact_depth() {
        let doc = parse(
            r#"<div id="root"><a id="link"><div id="wrap"><div id="inner"><img id="pic"></div></div></a></div>"#,
        );
        let img = doc.select("#pic");

        let link = ancestor(&img, 3).expect("three levels up");
        assert_eq!(get_attribute(&link, "id"), Some("link".to_string()));

        let root = ancestor(&img, 4).expect("four levels up");
        assert_eq!(get_attribute(&root, "id"), Some("root".to_string()));

        assert!(ancestor(&img, 0).is_some());
    }

    #[test]
    fn test_ancestor_runs_out() {
        let doc = parse(r#"<p id="p">text</p>"#);
        let p = doc.select("#p");

        // p -> body -> html -> document, nothing beyond
        assert!(ancestor(&p, 10).is_none());
    }

    #[test]
    fn test_query_selector_first_match() {
        let doc = parse(
            r#"
            <div id="container">
                <p class="text">First</p>
                <p class="text">Second</p>
            </div>
        "#,
        );
        let container = doc.select("#container");

        let first = query_selector(&container, "p.text").expect("match");
        assert_eq!(text_content(&first), "First".into());
        assert_eq!(query_selector_all(&container, "p.text").len(), 2);
        assert!(query_selector(&container, "span").is_none());
    }

    #[test]
    fn test_invalid_selector_is_no_match() {
        let doc = parse(r#"<div class="a">x</div>"#);

        assert!(document_query(&doc, "div.").is_none());
        assert!(document_query_all(&doc, "div..a").is_empty());
    }

    #[test]
    fn test_children_are_elements_only() {
        let doc = parse(r#"<ul> <li>1</li> text <li>2</li> <li>3</li> </ul>"#);
        let ul = doc.select("ul");

        assert_eq!(children(&ul).length(), 3);
    }
}
