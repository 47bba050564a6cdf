//! Count normalization.
//!
//! A single count is often rendered several ways at once: an abbreviated
//! figure as visible text ("12.3K") and the exact value in a `title` tooltip,
//! sometimes on the container and sometimes on an inner `span`. The most
//! precise source is picked and parsed as an integer.

use dom_query::Selection;
use serde::{Deserialize, Serialize};

use crate::dom;
use crate::error::{Error, Result};
use crate::patterns::{COUNT_SEPARATORS, LEADING_DIGITS};

/// The four textual sources of one count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountSources {
    pub container_text: Option<String>,
    pub container_title: Option<String>,
    pub child_text: Option<String>,
    pub child_title: Option<String>,
}

impl CountSources {
    /// Read the sources from a container element and its first inner `span`.
    #[must_use]
    pub fn from_element(container: &Selection) -> Self {
        let child = dom::query_selector(container, "span");
        Self {
            container_text: Some(dom::text_content(container).trim().to_string()),
            container_title: dom::get_attribute(container, "title"),
            child_text: child.as_ref().map(|c| dom::text_content(c).trim().to_string()),
            child_title: child.as_ref().and_then(|c| dom::get_attribute(c, "title")),
        }
    }

    /// Visible figure kept for display: the child's text, else the container's.
    #[must_use]
    pub fn display(&self) -> String {
        present(self.child_text.as_deref())
            .or_else(|| present(self.container_text.as_deref()))
            .unwrap_or_default()
            .to_string()
    }

    /// Normalize to a [`Count`].
    pub fn normalize(&self) -> Result<Count> {
        let value = normalize_count(
            self.container_text.as_deref(),
            self.container_title.as_deref(),
            self.child_text.as_deref(),
            self.child_title.as_deref(),
        )?;
        Ok(Count { value, raw: self.display() })
    }
}

/// A normalized count together with the string shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count {
    pub value: u64,
    pub raw: String,
}

fn present(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}

/// Pick the most precise present source and parse it.
///
/// Priority: child title, container title, child text, container text.
/// Separators (`.`, `,`) and whitespace are removed and the leading digits
/// parsed in base 10.
///
/// # Example
///
/// ```rust
/// use profile_scrape::count::normalize_count;
///
/// let n = normalize_count(Some("1,234"), Some("1,235"), Some("1.2K"), Some("1,236"))?;
/// assert_eq!(n, 1236);
/// # Ok::<(), profile_scrape::Error>(())
/// ```
pub fn normalize_count(
    container_text: Option<&str>,
    container_title: Option<&str>,
    child_text: Option<&str>,
    child_title: Option<&str>,
) -> Result<u64> {
    let source = present(child_title)
        .or_else(|| present(container_title))
        .or_else(|| present(child_text))
        .or_else(|| present(container_text))
        .ok_or_else(|| Error::ParseError("no count text present".to_string()))?;

    let stripped = COUNT_SEPARATORS.replace_all(source, "");
    let digits = LEADING_DIGITS
        .find(&stripped)
        .ok_or_else(|| Error::ParseError(format!("no digits in {source:?}")))?;

    digits
        .as_str()
        .parse::<u64>()
        .map_err(|e| Error::ParseError(format!("{source:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER_TEXT: &str = "1,234";
    const CONTAINER_TITLE: &str = "1,235";
    const CHILD_TEXT: &str = "1.2K";
    const CHILD_TITLE: &str = "1,236";

    #[test]
    fn test_child_title_wins() {
        let n = normalize_count(
            Some(CONTAINER_TEXT),
            Some(CONTAINER_TITLE),
            Some(CHILD_TEXT),
            Some(CHILD_TITLE),
        )
        .expect("count");
        assert_eq!(n, 1236);
    }

    #[test]
    fn test_every_presence_combination_uses_highest_priority() {
        for mask in 0u8..16 {
            let container_text = (mask & 1 != 0).then_some(CONTAINER_TEXT);
            let container_title = (mask & 2 != 0).then_some(CONTAINER_TITLE);
            let child_text = (mask & 4 != 0).then_some(CHILD_TEXT);
            let child_title = (mask & 8 != 0).then_some(CHILD_TITLE);

            let expected = if child_title.is_some() {
                Some(1236)
            } else if container_title.is_some() {
                Some(1235)
            } else if child_text.is_some() {
                // "1.2K" strips to "12K"
                Some(12)
            } else if container_text.is_some() {
                Some(1234)
            } else {
                None
            };

            let result = normalize_count(container_text, container_title, child_text, child_title);
            match expected {
                Some(value) => assert_eq!(result.ok(), Some(value), "mask {mask:04b}"),
                None => assert!(matches!(result, Err(Error::ParseError(_))), "mask {mask:04b}"),
            }
        }
    }

    #[test]
    fn test_blank_sources_are_skipped() {
        let n = normalize_count(Some("56"), Some(""), None, Some("   ")).expect("count");
        assert_eq!(n, 56);
    }

    #[test]
    fn test_whitespace_and_separators_are_stripped() {
        assert_eq!(normalize_count(Some("12 304 142"), None, None, None).ok(), Some(12_304_142));
        assert_eq!(normalize_count(Some("1.234.567"), None, None, None).ok(), Some(1_234_567));
        assert_eq!(normalize_count(Some("1,234 likes"), None, None, None).ok(), Some(1234));
    }

    #[test]
    fn test_no_digits_is_parse_error() {
        let result = normalize_count(Some("likes"), None, None, None);
        assert!(matches!(result, Err(Error::ParseError(_))));
    }

    #[test]
    fn test_sources_from_nested_span() {
        let doc = dom::parse(
            r#"<li><span class="c" title="1,204"><span title="12,304,142">12.3M</span></span></li>"#,
        );
        let container = doc.select("span.c");

        let sources = CountSources::from_element(&container);
        assert_eq!(sources.child_title.as_deref(), Some("12,304,142"));
        assert_eq!(sources.display(), "12.3M");

        let count = sources.normalize().expect("count");
        assert_eq!(count.value, 12_304_142);
        assert_eq!(count.raw, "12.3M");
    }

    #[test]
    fn test_sources_without_child() {
        let doc = dom::parse(r#"<li><span class="c">56</span> following</li>"#);
        let sources = CountSources::from_element(&doc.select("span.c"));

        assert!(sources.child_text.is_none());
        let count = sources.normalize().expect("count");
        assert_eq!(count, Count { value: 56, raw: "56".to_string() });
    }
}
