//! Result types for crawl output.
//!
//! Records are handed to an external writer as-is; field names follow the
//! camelCase wire format and absent optional fields are omitted.

use serde::{Deserialize, Serialize};

use crate::count::Count;

/// Profile metadata read from one profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Page the profile was read from.
    pub url: String,

    pub display_name: String,

    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Profile picture `src`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    pub post_count: u64,
    pub post_count_str: String,
    pub follower_count: u64,
    pub follower_count_str: String,
    pub following_count: u64,
    pub following_count_str: String,
}

impl Profile {
    pub(crate) fn set_counts(&mut self, posts: Count, followers: Count, following: Count) {
        self.post_count = posts.value;
        self.post_count_str = posts.raw;
        self.follower_count = followers.value;
        self.follower_count_str = followers.raw;
        self.following_count = following.value;
        self.following_count_str = following.raw;
    }
}

/// Render shape of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Image,
    Video,
}

/// One post read from its detail page.
///
/// Image posts carry `img_url`, `imgset_urls` and a like count; video posts
/// carry `video_url` and a view count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub url: String,

    #[serde(rename = "type")]
    pub kind: PostKind,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,

    /// Raw `srcset` of the post image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imgset_urls: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_count_str: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count_str: Option<String>,
}

impl Post {
    #[must_use]
    pub fn new(url: impl Into<String>, kind: PostKind) -> Self {
        Self {
            url: url.into(),
            kind,
            tags: Vec::new(),
            description: None,
            img_url: None,
            imgset_urls: None,
            like_count: None,
            like_count_str: None,
            video_url: None,
            view_count: None,
            view_count_str: None,
        }
    }
}

/// Everything one crawl produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlOutput {
    pub profile: Profile,
    pub posts: Vec<Post>,
}
