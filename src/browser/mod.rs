//! Browsing capability.
//!
//! Navigation, page lifetime and raw DOM access are provided by a host. The
//! crate only needs a handful of operations, captured by the [`Browser`] and
//! [`Page`] traits. Each page is a scoped resource: use [`with_page`] so it is
//! closed on every exit path.

pub mod fixture;

use dom_query::Document;

use crate::dom;
use crate::error::{Error, Result};

/// Pure host function callable from in-page script.
pub type Bridge = fn(&str) -> String;

/// Outcome of a navigation, available once the page is idle and its content
/// is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
}

/// A browser engine that can open independent browsing contexts.
pub trait Browser {
    /// Open a new page (tab).
    ///
    /// Hosts should request English content (`Accept-Language: en-US`); the
    /// like and view counters are recognized by their English labels.
    fn new_page(&self) -> Result<Box<dyn Page>>;
}

/// A single browsing context.
pub trait Page {
    /// Navigate and wait for network idle plus DOM content loaded.
    fn goto(&mut self, url: &str) -> Result<Response>;

    /// Current URL after any redirects.
    fn url(&self) -> String;

    /// Serialized HTML of the live DOM.
    fn content(&self) -> Result<String>;

    /// Make `bridge` callable by `name` from in-page script.
    fn expose_function(&mut self, name: &str, bridge: Bridge) -> Result<()>;

    /// Scroll to the bottom so lazily rendered content loads.
    fn scroll_to_bottom(&mut self) -> Result<()>;

    /// Release the context.
    fn close(self: Box<Self>) -> Result<()>;
}

/// Parse the page's current DOM into a queryable snapshot.
pub fn snapshot(page: &dyn Page) -> Result<Document> {
    Ok(dom::parse(&page.content()?))
}

/// Open a page, run `f`, and close the page whatever `f` returned.
///
/// An error from `f` takes precedence over an error while closing.
pub fn with_page<T, F>(browser: &dyn Browser, f: F) -> Result<T>
where
    F: FnOnce(&mut dyn Page) -> Result<T>,
{
    let mut page = browser.new_page()?;
    let result = f(page.as_mut());
    let closed = page.close();
    let value = result?;
    closed?;
    Ok(value)
}

/// Reject 404 and anything outside 2xx.
pub fn assert_page_success(url: &str, response: Response) -> Result<()> {
    match response.status {
        404 => Err(Error::ProfileNotFound(url.to_string())),
        200..=299 => Ok(()),
        status => Err(Error::PageLoadError { url: url.to_string(), status }),
    }
}

/// Navigate and fail on any unsuccessful status.
pub fn open(page: &mut dyn Page, url: &str) -> Result<()> {
    let response = page.goto(url)?;
    assert_page_success(url, response)
}
