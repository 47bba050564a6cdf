//! Post URL collection over a lazily loaded grid.
//!
//! The profile grid only renders a window of posts; more appear after
//! scrolling. The collector re-queries the post-link selector after every
//! scroll until it holds as many distinct URLs as the target.

use std::collections::BTreeSet;

use url::Url;

use crate::browser::{snapshot, Page};
use crate::dom;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::progress::Reporter;
use crate::url_utils::create_absolute_url;

/// Distinct post URLs accumulated toward a target size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostUrlCollector {
    target: usize,
    urls: BTreeSet<String>,
}

impl PostUrlCollector {
    /// Collector for `min(reported, limit)` URLs.
    #[must_use]
    pub fn new(reported: u64, limit: Option<usize>) -> Self {
        let reported = usize::try_from(reported).unwrap_or(usize::MAX);
        let target = limit.map_or(reported, |l| l.min(reported));
        Self { target, urls: BTreeSet::new() }
    }

    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.urls.len() >= self.target
    }

    /// Add URLs until the target is reached; returns how many were new.
    pub fn absorb<I, S>(&mut self, urls: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.urls.len();
        for url in urls {
            if self.is_complete() {
                break;
            }
            self.urls.insert(url.into());
        }
        self.urls.len() - before
    }

    #[must_use]
    pub fn into_urls(self) -> BTreeSet<String> {
        self.urls
    }
}

/// Absolute `href`s of every element matching `link_selector`.
#[must_use]
pub fn post_links(html: &dom::Document, link_selector: &str, base: &Url) -> Vec<String> {
    dom::document_query_all(html, link_selector)
        .iter()
        .filter_map(|link| dom::get_attribute(link, "href"))
        .filter_map(|href| create_absolute_url(&href, base))
        .collect()
}

/// Scroll through a loaded profile page until `reported` (or the configured
/// limit) distinct post URLs are collected.
///
/// Fails with [`Error::StalledError`] after `max_stall_iterations` rounds in a
/// row that add nothing.
pub fn collect_post_urls(
    page: &mut dyn Page,
    link_selector: &str,
    reported: u64,
    base: &Url,
    options: &Options,
    reporter: &Reporter,
) -> Result<BTreeSet<String>> {
    let mut collector = PostUrlCollector::new(reported, options.effective_limit());
    reporter.info(&format!("collecting {} post urls", collector.target()));

    let mut stalled = 0;
    while !collector.is_complete() {
        let doc = snapshot(page)?;
        let added = collector.absorb(post_links(&doc, link_selector, base));
        tracing::debug!(added, total = collector.len(), target = collector.target(), "pagination round");

        if collector.is_complete() {
            break;
        }
        if added == 0 {
            stalled += 1;
            if stalled >= options.max_stall_iterations {
                return Err(Error::StalledError {
                    collected: collector.len(),
                    target: collector.target(),
                });
            }
        } else {
            stalled = 0;
        }

        page.scroll_to_bottom()?;
        if !options.scroll_delay.is_zero() {
            std::thread::sleep(options.scroll_delay);
        }
    }

    Ok(collector.into_urls())
}
