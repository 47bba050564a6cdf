//! # profile-scrape
//!
//! Self-calibrating scraper for social profile pages whose markup uses
//! generated, frequently changing class names.
//!
//! Instead of hard-coding CSS selectors, the crate calibrates against a known
//! reference profile using a few trusted facts (a [`Template`]): it finds the
//! nodes carrying those facts and records how to reach them again. The
//! resulting [`SelectorSet`]s are replayed on any structurally similar page.
//!
//! ## Quick Start
//!
//! ```rust
//! use profile_scrape::{dom, discovery, extractor, Template};
//! use profile_scrape::url_utils::parse_base;
//!
//! let template = Template {
//!     username: "alice".into(),
//!     display_name: "Alice A".into(),
//!     video_post_alt: "video by alice".into(),
//!     photo_post_alt: "photo by alice".into(),
//!     first_post_alt: "photo by alice".into(),
//! };
//! let html = r#"<main>
//!   <img class="pp" alt="alice's profile picture" src="/a.jpg">
//!   <h1 class="dn">Alice A</h1><h2 class="un">alice</h2>
//!   <section><div></div>
//!     <ul class="c"><li><span>12</span></li><li><span>34</span></li><li><span>56</span></li></ul>
//!     <div class="bio"><span>hello</span></div></section>
//!   <div class="row">
//!     <a href="/p/v/"><div><div><img alt="video by alice"></div></div></a>
//!     <a href="/p/p/"><div><div><img alt="photo by alice"></div></div></a>
//!   </div></main>"#;
//!
//! let doc = dom::parse(html);
//! let base = parse_base("https://instagram.com")?;
//! let found = discovery::discover_profile(&doc, &template, &base)?;
//! let profile = extractor::extract_profile(&doc, &found.selectors, "https://instagram.com/alice/")?;
//! assert_eq!(profile.follower_count, 34);
//! # Ok::<(), profile_scrape::Error>(())
//! ```
//!
//! ## Stages
//!
//! - **Discovery**: derive selector sets from reference pages
//! - **Pagination**: scroll a profile grid until every post URL is known
//! - **Extraction**: replay selector sets on live pages, normalizing counts

mod error;
mod options;
mod patterns;
mod result;
mod template;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Browsing capability traits and the in-memory replay host.
pub mod browser;

/// Predicate scans, class canonicalization and selector sets.
pub mod selector;

/// Calibration of selector sets from reference pages.
pub mod discovery;

/// Replaying selector sets to produce records.
pub mod extractor;

/// Reconciling the textual forms of one count.
pub mod count;

/// Post URL collection over lazily loaded grids.
pub mod pagination;

/// Progress reporting.
pub mod progress;

/// Crawl session orchestration.
pub mod crawler;

/// URL resolution against the site origin.
pub mod url_utils;

/// Serialized crawl output.
pub mod output;

// Public API - re-exports
pub use crawler::Crawler;
pub use error::{Error, Result};
pub use options::Options;
pub use output::OutputFormat;
pub use result::{CrawlOutput, Post, PostKind, Profile};
pub use selector::{Field, SelectorSet};
pub use template::Template;

/// Calibrate on the template profile and crawl `target` with default reporting.
///
/// # Example
///
/// ```rust
/// use profile_scrape::browser::fixture::FixtureBrowser;
/// use profile_scrape::{crawl, Error, Options, Template};
///
/// let template = Template {
///     username: "alice".into(),
///     display_name: "Alice A".into(),
///     video_post_alt: "video by alice".into(),
///     photo_post_alt: "photo by alice".into(),
///     first_post_alt: "photo by alice".into(),
/// };
/// // No pages recorded: the template profile answers 404.
/// let browser = FixtureBrowser::new();
/// let result = crawl(&browser, template, "bob", &Options { silent: true, ..Options::default() });
/// assert!(matches!(result, Err(Error::ProfileNotFound(_))));
/// assert_eq!(browser.opened_pages(), browser.closed_pages());
/// ```
pub fn crawl(
    browser: &dyn browser::Browser,
    template: Template,
    target: &str,
    options: &Options,
) -> Result<CrawlOutput> {
    Crawler::new(browser, template, options.clone())?.crawl(target)
}
