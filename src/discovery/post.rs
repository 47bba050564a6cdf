//! Post-page calibration.
//!
//! Photo and video posts render differently, so each shape is calibrated on
//! its own example page and the two partial sets are merged by field.

use dom_query::{Document, Selection};

use crate::dom;
use crate::error::{Error, Result};
use crate::selector::{self, utils, Field, SelectorSet};
use crate::template::Template;

/// Buttons that may hold the like counter.
const LIKE_CANDIDATES: &str = "article > div > section > div > div > button";

/// Spans that may hold the view counter.
const VIEW_CANDIDATES: &str = "article > div > section > div > span";

/// Fields taken from the photo-shape calibration.
pub const PHOTO_FIELDS: &[Field] = &[Field::Img, Field::Description, Field::Tags, Field::LikeCount];

/// Fields taken from the video-shape calibration.
pub const VIDEO_FIELDS: &[Field] = &[Field::Video, Field::ViewCount];

/// Derive the selector set for one example post page.
pub fn discover_post(doc: &Document, template: &Template) -> Result<SelectorSet> {
    let article = dom::document_query(doc, "article").ok_or_else(metadata_error)?;
    let mut selectors = SelectorSet::new();

    if let Some(img) = selector::query_within(&article, "img", |img| {
        utils::attr_equals(img, "alt", &template.photo_post_alt) && dom::has_attribute(img, "srcset")
    }) {
        selectors.insert(Field::Img, format!("article {} img", parent_selector(&img)));
    }

    if let Some(video) = selector::query_within(&article, "video", |v| {
        dom::has_attribute(v, "src") && dom::has_attribute(v, "type")
    }) {
        selectors.insert(Field::Video, format!("article {} video", parent_selector(&video)));
    }

    let list = dom::query_selector(&article, "ul").ok_or_else(metadata_error)?;
    let list_parent = parent_selector(&list);
    selectors.insert(
        Field::Description,
        format!("article {list_parent} ul li:first-child > div > div > div:nth-child(2) > span"),
    );
    selectors.insert(Field::Tags, format!("article {list_parent} ul li:first-child span a"));

    if let Some(button) = selector::query_within(&article.parent(), LIKE_CANDIDATES, |b| {
        utils::text(b).contains("like")
    }) {
        selectors.insert(
            Field::LikeCount,
            format!("article > div > section > div > {} > button", parent_selector(&button)),
        );
    }

    if let Some(span) = selector::query_within(&article.parent(), VIEW_CANDIDATES, |s| {
        utils::text(s).contains("view")
    }) {
        selectors.insert(
            Field::ViewCount,
            format!("article > div > section > {} > span", parent_selector(&span)),
        );
    }

    let one_media = selectors.contains(Field::Img) != selectors.contains(Field::Video);
    let one_counter = selectors.contains(Field::LikeCount) != selectors.contains(Field::ViewCount);
    if !one_media || !one_counter {
        return Err(metadata_error());
    }
    selectors.ensure(&[Field::Description, Field::Tags], "post-metadata")?;

    Ok(selectors)
}

/// Combine the photo-shape and video-shape sets into one post selector set.
pub fn merge_post_selectors(photo: &SelectorSet, video: &SelectorSet) -> Result<SelectorSet> {
    let mut merged = SelectorSet::new();
    merged.merge_from(photo, PHOTO_FIELDS);
    merged.merge_from(video, VIDEO_FIELDS);

    let mut required = PHOTO_FIELDS.to_vec();
    required.extend_from_slice(VIDEO_FIELDS);
    merged.ensure(&required, "post-metadata")?;
    Ok(merged)
}

fn parent_selector(sel: &Selection) -> String {
    utils::element_selector(&dom::parent(sel))
}

fn metadata_error() -> Error {
    Error::DiscoveryError("post-metadata".to_string())
}
