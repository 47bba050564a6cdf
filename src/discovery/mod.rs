//! Selector discovery.
//!
//! Calibrates [`SelectorSet`](crate::selector::SelectorSet)s against known-good
//! reference pages. Runs once per crawl session, before any extraction.
//!
//! The ancestor depths used to reach post links and grid rows are fixed
//! assumptions about the page structure; they survive class-name churn but
//! not layout changes.

pub mod post;
pub mod profile;

pub use post::{discover_post, merge_post_selectors};
pub use profile::{discover_profile, ProfileDiscovery, POST_LINK_DEPTH, POST_ROOT_DEPTH};

use crate::selector::SelectorSet;

/// Selector sets for every page shape of a crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calibration {
    /// Profile page fields and the post-link selector.
    pub profile: SelectorSet,
    /// Merged photo/video post fields.
    pub posts: SelectorSet,
}
