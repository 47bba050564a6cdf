//! Structured extraction.
//!
//! Replays a discovered [`SelectorSet`] against a live document. Each selector
//! resolves to at most one element (the first match); counts are routed
//! through the [`count`](crate::count) normalizer.

pub mod post;
pub mod profile;

pub use post::extract_post;
pub use profile::extract_profile;

use dom_query::{Document, Selection};

use crate::count::{Count, CountSources};
use crate::dom;
use crate::error::{Error, Result};
use crate::selector::{Field, SelectorSet};

/// Element for a mandatory field.
pub(crate) fn required<'a>(doc: &'a Document, selectors: &SelectorSet, field: Field) -> Result<Selection<'a>> {
    let selector = selectors.require(field)?;
    dom::document_query(doc, selector).ok_or_else(|| Error::ExtractionError(field.to_string()))
}

/// Element for an optional field; `None` when unset or unmatched.
pub(crate) fn optional<'a>(doc: &'a Document, selectors: &SelectorSet, field: Field) -> Option<Selection<'a>> {
    selectors
        .get(field)
        .and_then(|selector| dom::document_query(doc, selector))
}

/// Trimmed text, `None` when blank.
pub(crate) fn non_blank_text(sel: &Selection) -> Option<String> {
    let text = dom::text_content(sel).trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Normalized count for a mandatory field.
pub(crate) fn count(doc: &Document, selectors: &SelectorSet, field: Field) -> Result<Count> {
    let container = required(doc, selectors, field)?;
    CountSources::from_element(&container)
        .normalize()
        .map_err(|e| match e {
            Error::ParseError(reason) => Error::ParseError(format!("{field}: {reason}")),
            other => other,
        })
}
