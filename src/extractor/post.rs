//! Post extraction.

use dom_query::Document;

use super::{count, non_blank_text, optional, required};
use crate::dom;
use crate::error::Result;
use crate::result::{Post, PostKind};
use crate::selector::{Field, SelectorSet};

/// Read a [`Post`] from its detail page.
///
/// The post is a video when the video selector resolves; otherwise it is an
/// image post and the image and like counter become mandatory.
pub fn extract_post(doc: &Document, selectors: &SelectorSet, url: &str) -> Result<Post> {
    let video = optional(doc, selectors, Field::Video);
    let kind = if video.is_some() { PostKind::Video } else { PostKind::Image };

    let mut post = Post::new(url, kind);
    post.tags = selectors
        .get(Field::Tags)
        .map(|selector| {
            dom::document_query_all(doc, selector)
                .iter()
                .map(|tag| dom::text_content(tag).trim().to_string())
                .collect()
        })
        .unwrap_or_default();
    post.description = optional(doc, selectors, Field::Description).and_then(|s| non_blank_text(&s));

    match video {
        Some(video) => {
            post.video_url = dom::get_attribute(&video, "src");
            let views = count(doc, selectors, Field::ViewCount)?;
            post.view_count = Some(views.value);
            post.view_count_str = Some(views.raw);
        }
        None => {
            let img = required(doc, selectors, Field::Img)?;
            post.img_url = dom::get_attribute(&img, "src");
            post.imgset_urls = dom::get_attribute(&img, "srcset");
            let likes = count(doc, selectors, Field::LikeCount)?;
            post.like_count = Some(likes.value);
            post.like_count_str = Some(likes.raw);
        }
    }

    Ok(post)
}
