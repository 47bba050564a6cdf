//! Configuration options for a crawl.
//!
//! The `Options` struct controls where pages are fetched from, how far
//! pagination goes and how chatty progress reporting is.

use std::time::Duration;

/// Configuration options for a crawl.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use profile_scrape::Options;
///
/// let options = Options {
///     limit: Some(10),
///     silent: true,
///     ..Options::default()
/// };
/// assert_eq!(options.effective_limit(), Some(10));
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Origin that profile names and relative post links are resolved against.
    ///
    /// Default: `https://instagram.com`
    pub base_url: String,

    /// Collect at most this many posts.
    ///
    /// `Some(0)` behaves like `None`.
    ///
    /// Default: `None`
    pub limit: Option<usize>,

    /// Consecutive pagination rounds without a new post URL before giving up.
    ///
    /// Default: `20`
    pub max_stall_iterations: usize,

    /// Pause after each scroll so lazily rendered posts can appear.
    ///
    /// Default: `500ms`
    pub scroll_delay: Duration,

    /// Suppress progress reporting.
    ///
    /// Default: `false`
    pub silent: bool,
}

impl Options {
    /// The configured limit, with `0` meaning unlimited.
    #[must_use]
    pub fn effective_limit(&self) -> Option<usize> {
        self.limit.filter(|l| *l > 0)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: "https://instagram.com".to_string(),
            limit: None,
            max_stall_iterations: 20,
            scroll_delay: Duration::from_millis(500),
            silent: false,
        }
    }
}
