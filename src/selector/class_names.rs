//! Class attribute canonicalization.
//!
//! Turns a raw `class` attribute into a compound class-selector fragment that
//! can be appended to a tag name. This is the only piece of trusted logic that
//! browsing hosts expose to in-page script, so it stays pure.

/// Name under which [`class_selector`] is registered on every page.
pub const CLASS_SELECTOR_BRIDGE: &str = "computeClassNames";

/// Format a class attribute for use in a selector.
///
/// Classes are split on any run of whitespace and emitted in source order,
/// without deduplication. Characters that are not valid in a CSS identifier
/// are escaped so the fragment always parses.
///
/// # Example
///
/// ```rust
/// use profile_scrape::selector::class_names::class_selector;
///
/// assert_eq!(class_selector("container  danger\thidden-xs"), ".container.danger.hidden-xs");
/// assert_eq!(class_selector("md:flex"), r".md\:flex");
/// assert_eq!(class_selector(""), "");
/// ```
#[must_use]
pub fn class_selector(class_attr: &str) -> String {
    class_attr
        .split_whitespace()
        .fold(String::with_capacity(class_attr.len() + 1), |mut acc, class| {
            acc.push('.');
            push_escaped(&mut acc, class);
            acc
        })
}

/// Append `ident` to `out` as a CSS identifier.
fn push_escaped(out: &mut String, ident: &str) {
    let starts_with_dash = ident.starts_with('-');
    let lone_dash = ident == "-";

    for (i, c) in ident.chars().enumerate() {
        let leading_digit = c.is_ascii_digit() && (i == 0 || (i == 1 && starts_with_dash));
        match c {
            '\0' => out.push('\u{FFFD}'),
            '\u{1}'..='\u{1f}' | '\u{7f}' => out.push_str(&format!("\\{:x} ", u32::from(c))),
            _ if leading_digit => out.push_str(&format!("\\{:x} ", u32::from(c))),
            '-' if lone_dash => out.push_str("\\-"),
            '-' | '_' => out.push(c),
            _ if c.is_ascii_alphanumeric() || !c.is_ascii() => out.push(c),
            _ => {
                out.push('\\');
                out.push(c);
            }
        }
    }
}

/// `{tag}{classes}` for an optional class attribute.
#[must_use]
pub fn tag_selector(tag: &str, class_attr: Option<&str>) -> String {
    format!("{tag}{}", class_selector(class_attr.unwrap_or_default()))
}
