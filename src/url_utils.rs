//! URL Utility Functions
//!
//! Resolution of profile addresses and relative post links against the
//! site's base origin.

use url::Url;

use crate::error::{Error, Result};

/// Check if a string is an absolute http(s) URL with a host.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }

    Url::parse(s).is_ok_and(|url| url.host().is_some())
}

/// Parse the configured base origin.
pub fn parse_base(base_url: &str) -> Result<Url> {
    let base = Url::parse(base_url.trim())
        .map_err(|e| Error::TemplateError(format!("base url {base_url:?}: {e}")))?;
    if base.host().is_none() {
        return Err(Error::TemplateError(format!("base url {base_url:?} has no host")));
    }
    Ok(base)
}

/// Convert a relative or absolute URL to absolute form.
///
/// Returns `None` for blank input or when resolution fails.
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> Option<String> {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return None;
    }

    if is_absolute_url(url_str) {
        return Some(url_str.to_string());
    }

    base.join(url_str).ok().map(|resolved| resolved.to_string())
}

/// Address of a user's profile page.
pub fn profile_url(base: &Url, username: &str) -> Result<String> {
    let username = username.trim().trim_matches('/');
    if username.is_empty() {
        return Err(Error::TemplateError("username is empty".to_string()));
    }
    create_absolute_url(&format!("/{username}/"), base)
        .ok_or_else(|| Error::TemplateError(format!("can't build profile url for {username:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        parse_base("https://instagram.com").expect("valid base")
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://instagram.com/p/abc/"));
        assert!(is_absolute_url("  http://example.com "));
        assert!(!is_absolute_url("/p/abc/"));
        assert!(!is_absolute_url("ftp://example.com/file"));
        assert!(!is_absolute_url(""));
    }

    #[test]
    fn test_relative_link_joins_origin() {
        assert_eq!(
            create_absolute_url("/p/B1a2/", &base()).as_deref(),
            Some("https://instagram.com/p/B1a2/")
        );
    }

    #[test]
    fn test_absolute_link_is_kept() {
        assert_eq!(
            create_absolute_url("https://cdn.example.com/p/1/", &base()).as_deref(),
            Some("https://cdn.example.com/p/1/")
        );
    }

    #[test]
    fn test_blank_link_is_none() {
        assert_eq!(create_absolute_url("  ", &base()), None);
    }

    #[test]
    fn test_profile_url() {
        assert_eq!(profile_url(&base(), "alice").ok().as_deref(), Some("https://instagram.com/alice/"));
        assert!(matches!(profile_url(&base(), " "), Err(Error::TemplateError(_))));
    }

    #[test]
    fn test_parse_base_rejects_garbage() {
        assert!(parse_base("not a url").is_err());
    }
}
