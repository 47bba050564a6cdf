//! Selector Infrastructure
//!
//! Ordered predicate scans over candidate nodes, the class canonicalizer and
//! the [`SelectorSet`] produced by discovery.
//!
//! Discovery never scores candidates: the first node (in document order) that
//! passes a structural predicate wins and is never revisited.

use dom_query::{Document, Selection};

use crate::dom;

pub mod class_names;
pub mod set;
pub mod utils;

pub use set::{Field, SelectorSet};

/// Return the first candidate accepted by `predicate`.
///
/// Independent of any DOM binding, so scans can be exercised over plain
/// values as well as nodes.
///
/// # Example
///
/// ```rust
/// use profile_scrape::selector::find_first;
///
/// let found = find_first(vec![1, 4, 6, 9], |n| n % 2 == 0);
/// assert_eq!(found, Some(4));
/// ```
pub fn find_first<T, I, P>(candidates: I, mut predicate: P) -> Option<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    for candidate in candidates {
        if predicate(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// First element of the document matching `selector` that satisfies `rule`.
#[must_use]
pub fn query<'a, P>(doc: &'a Document, selector: &str, rule: P) -> Option<Selection<'a>>
where
    P: FnMut(&Selection<'a>) -> bool,
{
    find_first(dom::document_query_all(doc, selector), rule)
}

/// First element under `root` matching `selector` that satisfies `rule`.
#[must_use]
pub fn query_within<'a, P>(root: &Selection<'a>, selector: &str, rule: P) -> Option<Selection<'a>>
where
    P: FnMut(&Selection<'a>) -> bool,
{
    find_first(dom::query_selector_all(root, selector), rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_takes_earliest_match() {
        let words = ["alpha", "beta", "bravo", "charlie"];
        assert_eq!(find_first(words, |w| w.starts_with('b')), Some("beta"));
    }

    #[test]
    fn test_find_first_none() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(find_first(empty, |_| true), None);
        assert_eq!(find_first([1, 3, 5], |n| n % 2 == 0), None);
    }

    #[test]
    fn test_query_finds_first_match_in_document_order() {
        let doc = dom::parse(
            r#"
            <div>
                <p class="target">First</p>
                <p class="target">Second</p>
            </div>
        "#,
        );

        let result = query(&doc, "p", |p| utils::class(p).contains("target"));
        let p = result.expect("a match");
        assert_eq!(dom::text_content(&p), "First".into());
    }

    #[test]
    fn test_query_within_is_scoped() {
        let doc = dom::parse(
            r#"
            <p class="x">outside</p>
            <article><p class="x">inside</p></article>
        "#,
        );
        let article = doc.select("article");

        let p = query_within(&article, "p", |p| utils::class(p) == "x").expect("a match");
        assert_eq!(dom::text_content(&p), "inside".into());
    }
}
