//! Utility functions for structural predicates
//!
//! Helpers shared by discovery rules: attribute access with empty-string
//! defaults, trimmed text, child shape checks and selector emission.

use crate::dom;
use crate::selector::class_names::tag_selector;
use dom_query::Selection;

// === Element Attribute Helpers ===

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    dom::class_name(sel).unwrap_or_default()
}

/// Get any attribute (empty string if missing)
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> String {
    dom::get_attribute(sel, name).unwrap_or_default()
}

/// Trimmed attribute equals `expected`.
#[must_use]
pub fn attr_equals(sel: &Selection, name: &str, expected: &str) -> bool {
    dom::get_attribute(sel, name).is_some_and(|v| v.trim() == expected)
}

/// Get tag name (empty string if missing)
#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

/// Trimmed text content.
#[must_use]
pub fn text(sel: &Selection) -> String {
    dom::text_content(sel).trim().to_string()
}

/// Trimmed text content equals `expected`.
#[must_use]
pub fn text_equals(sel: &Selection, expected: &str) -> bool {
    dom::text_content(sel).trim() == expected
}

// === Shape Checks ===

/// Number of direct element children.
#[must_use]
pub fn child_count(sel: &Selection) -> usize {
    dom::children(sel).length()
}

/// Tag names of direct element children, in order.
#[must_use]
pub fn child_tags(sel: &Selection) -> Vec<String> {
    dom::children(sel)
        .nodes()
        .iter()
        .map(|node| tag(&Selection::from(*node)))
        .collect()
}

/// Direct element children match `tags` exactly, in order.
#[must_use]
pub fn has_child_shape(sel: &Selection, tags: &[&str]) -> bool {
    let actual = child_tags(sel);
    actual.len() == tags.len() && actual.iter().zip(tags).all(|(a, b)| a == b)
}

/// `index`-th direct element child (0-based).
#[must_use]
pub fn nth_child<'a>(sel: &Selection<'a>, index: usize) -> Option<Selection<'a>> {
    dom::children(sel)
        .nodes()
        .get(index)
        .map(|node| Selection::from(*node))
}

// === Selector Emission ===

/// `{tag}{classes}` for an element, e.g. `h1.x.y`.
#[must_use]
pub fn element_selector(sel: &Selection) -> String {
    tag_selector(&tag(sel), dom::class_name(sel).as_deref())
}
