//! Crawl session.
//!
//! Sequences one crawl: calibrate on the template profile and its two example
//! posts, read the target profile and collect its post URLs, then visit every
//! post. One page is open at a time and every page is closed on every path.
//! The first error aborts the session.

use url::Url;

use crate::browser::{open, snapshot, with_page, Browser, Page};
use crate::discovery::{self, Calibration};
use crate::error::{Error, Result};
use crate::extractor::{extract_post, extract_profile};
use crate::options::Options;
use crate::pagination::collect_post_urls;
use crate::progress::Reporter;
use crate::result::{CrawlOutput, Post};
use crate::selector::class_names::{class_selector, CLASS_SELECTOR_BRIDGE};
use crate::selector::{Field, SelectorSet};
use crate::template::Template;
use crate::url_utils::{parse_base, profile_url};

/// A crawl session bound to one browsing host and one template.
pub struct Crawler<'b> {
    browser: &'b dyn Browser,
    template: Template,
    options: Options,
    reporter: Reporter,
    base: Url,
}

impl<'b> Crawler<'b> {
    pub fn new(browser: &'b dyn Browser, template: Template, options: Options) -> Result<Self> {
        template.validate()?;
        let base = parse_base(&options.base_url)?;
        let reporter = Reporter::new(options.silent);
        Ok(Self { browser, template, options, reporter, base })
    }

    /// Derive the profile and post selector sets from the template pages.
    pub fn calibrate(&self) -> Result<Calibration> {
        let url = profile_url(&self.base, &self.template.username)?;
        let found = self.stage("discover profile selectors", || {
            with_page(self.browser, |page| {
                let doc = self.load(page, &url)?;
                discovery::discover_profile(&doc, &self.template, &self.base)
            })
        })?;
        self.reporter.selectors("profile", &found.selectors);

        let photo = self.stage("discover photo post selectors", || {
            self.discover_post_page(&found.photo_post_url)
        })?;
        let video = self.stage("discover video post selectors", || {
            self.discover_post_page(&found.video_post_url)
        })?;
        let posts = discovery::merge_post_selectors(&photo, &video)?;
        self.reporter.selectors("posts", &posts);

        Ok(Calibration { profile: found.selectors, posts })
    }

    /// Calibrate, then crawl `target`'s profile and every collected post.
    pub fn crawl(&self, target: &str) -> Result<CrawlOutput> {
        let target = target.trim();
        if target.is_empty() {
            return Err(Error::TemplateError("a username to crawl is required".to_string()));
        }
        self.reporter.info(&format!("will crawl target profile {target}"));

        let calibration = self.calibrate()?;
        self.crawl_with(&calibration, target)
    }

    /// Crawl `target` with selector sets from an earlier calibration.
    pub fn crawl_with(&self, calibration: &Calibration, target: &str) -> Result<CrawlOutput> {
        let url = profile_url(&self.base, target)?;
        let link_selector = calibration.profile.require(Field::PostLink)?;

        let (profile, post_urls) = self.stage("crawl profile", || {
            with_page(self.browser, |page| {
                let doc = self.load(page, &url)?;
                let profile = extract_profile(&doc, &calibration.profile, &page.url())?;
                let urls = collect_post_urls(
                    page,
                    link_selector,
                    profile.post_count,
                    &self.base,
                    &self.options,
                    &self.reporter,
                )?;
                Ok((profile, urls))
            })
        })?;

        let posts = self.stage("crawl posts", || {
            post_urls
                .iter()
                .map(|post_url| self.crawl_post(&calibration.posts, post_url))
                .collect::<Result<Vec<Post>>>()
        })?;

        Ok(CrawlOutput { profile, posts })
    }

    fn crawl_post(&self, selectors: &SelectorSet, url: &str) -> Result<Post> {
        self.reporter.info(&format!("will crawl post {url}"));
        with_page(self.browser, |page| {
            let doc = self.load(page, url)?;
            extract_post(&doc, selectors, url)
        })
    }

    fn discover_post_page(&self, url: &str) -> Result<SelectorSet> {
        with_page(self.browser, |page| {
            let doc = self.load(page, url)?;
            discovery::discover_post(&doc, &self.template)
        })
    }

    /// Register the canonicalizer bridge, navigate and snapshot the DOM.
    fn load(&self, page: &mut dyn Page, url: &str) -> Result<dom_query::Document> {
        page.expose_function(CLASS_SELECTOR_BRIDGE, class_selector)?;
        open(page, url)?;
        snapshot(page)
    }

    fn stage<T>(&self, name: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
        self.reporter.start(name);
        match f() {
            Ok(value) => {
                self.reporter.succeed(name);
                Ok(value)
            }
            Err(e) => {
                self.reporter.fail(name, &e);
                Err(e)
            }
        }
    }
}
