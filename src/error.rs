//! Error types for profile-scrape.
//!
//! Every stage of a crawl fails fast: the first error aborts the whole run
//! and carries the logical field or page that caused it.

/// Error type for calibration, pagination and extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Navigation returned a non-2xx status.
    #[error("Page load failed: {url} returned status {status}")]
    PageLoadError { url: String, status: u16 },

    /// Navigation returned 404 for a profile or post.
    #[error("Page doesn't exist: {0}")]
    ProfileNotFound(String),

    /// A required structural pattern was not found while calibrating.
    #[error("Selector discovery failed: couldn't find {0}")]
    DiscoveryError(String),

    /// A discovered selector resolved to no element on a live page.
    #[error("Extraction failed: selector for {0} matched nothing")]
    ExtractionError(String),

    /// No usable numeric source for a count.
    #[error("Count parsing failed: {0}")]
    ParseError(String),

    /// Pagination stopped yielding new post links.
    #[error("Pagination stalled at {collected} of {target} post URLs")]
    StalledError { collected: usize, target: usize },

    /// The template or crawl target is unusable.
    #[error("Invalid template: {0}")]
    TemplateError(String),

    /// The browsing host failed outside of a page load.
    #[error("Browser failure: {0}")]
    BrowserError(String),

    /// The crawl output could not be serialized.
    #[error("Output serialization failed: {0}")]
    OutputError(String),
}

/// Result type alias for crawl operations.
pub type Result<T> = std::result::Result<T, Error>;
