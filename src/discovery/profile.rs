//! Profile-page calibration.
//!
//! Each field group is located from a known fact in the reference page and
//! turned into a selector built from the node's tag and generated classes.

use dom_query::{Document, Selection};
use url::Url;

use crate::dom;
use crate::error::{Error, Result};
use crate::selector::{self, utils, Field, SelectorSet};
use crate::template::Template;
use crate::url_utils::create_absolute_url;

/// Levels from a post thumbnail up to the container shared by a grid row.
pub const POST_ROOT_DEPTH: usize = 4;

/// Levels from a post thumbnail up to its enclosing link.
pub const POST_LINK_DEPTH: usize = 3;

/// Fields every profile selector set must carry.
pub const REQUIRED_FIELDS: &[Field] = &[
    Field::DisplayName,
    Field::Username,
    Field::PostCount,
    Field::FollowerCount,
    Field::FollowingCount,
    Field::ProfileImage,
    Field::Bio,
    Field::PostLink,
];

/// Result of calibrating against the reference profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDiscovery {
    pub selectors: SelectorSet,
    /// Absolute URL of the example photo post.
    pub photo_post_url: String,
    /// Absolute URL of the example video post.
    pub video_post_url: String,
}

/// Derive the profile selector set from the reference profile document.
pub fn discover_profile(doc: &Document, template: &Template, base: &Url) -> Result<ProfileDiscovery> {
    let mut selectors = SelectorSet::new();

    find_names(doc, template, &mut selectors)?;
    find_counts(doc, &mut selectors)?;
    find_profile_picture(doc, template, &mut selectors)?;
    find_bio_and_website(doc, &mut selectors)?;
    let (photo_post_url, video_post_url) = find_post_links(doc, template, base, &mut selectors)?;

    selectors.ensure(REQUIRED_FIELDS, "profile")?;

    Ok(ProfileDiscovery { selectors, photo_post_url, video_post_url })
}

/// Display name in an `h1`, username in an `h2`.
fn find_names(doc: &Document, template: &Template, selectors: &mut SelectorSet) -> Result<()> {
    let display_name = selector::query(doc, "h1", |h1| utils::text_equals(h1, &template.display_name));
    let username = selector::query(doc, "h2", |h2| utils::text_equals(h2, &template.username));

    match (display_name, username) {
        (Some(h1), Some(h2)) => {
            selectors.insert(Field::DisplayName, utils::element_selector(&h1));
            selectors.insert(Field::Username, utils::element_selector(&h2));
            Ok(())
        }
        _ => Err(Error::DiscoveryError("username-or-displayName".to_string())),
    }
}

/// Post, follower and following counts as the three items of one list.
fn find_counts(doc: &Document, selectors: &mut SelectorSet) -> Result<()> {
    let list = selector::query(doc, "ul", |ul| utils::child_count(ul) == 3)
        .ok_or_else(|| Error::DiscoveryError("postCount-followerCount-followingCount".to_string()))?;

    let list_selector = utils::element_selector(&list);
    selectors.insert(Field::PostCount, format!("{list_selector} li:first-child span"));
    selectors.insert(Field::FollowerCount, format!("{list_selector} li:nth-child(2) span"));
    selectors.insert(Field::FollowingCount, format!("{list_selector} li:nth-child(3) span"));
    Ok(())
}

/// Profile picture, either the owner's photo or the upload placeholder.
fn find_profile_picture(doc: &Document, template: &Template, selectors: &mut SelectorSet) -> Result<()> {
    let alts = template.profile_picture_alts();
    let img = selector::query(doc, "img", |img| {
        alts.iter().any(|alt| utils::attr_equals(img, "alt", alt))
    })
    .ok_or_else(|| Error::DiscoveryError("profile-picture".to_string()))?;

    selectors.insert(Field::ProfileImage, utils::element_selector(&img));
    Ok(())
}

/// Bio and website live in the last block of a `section > (div, ul, div)`.
fn find_bio_and_website(doc: &Document, selectors: &mut SelectorSet) -> Result<()> {
    let section = selector::query(doc, "section", |s| utils::has_child_shape(s, &["div", "ul", "div"]))
        .ok_or_else(|| Error::DiscoveryError("bio".to_string()))?;
    let block = utils::nth_child(&section, 2).ok_or_else(|| Error::DiscoveryError("bio".to_string()))?;

    let block_selector = utils::element_selector(&block);
    if let Some(link) = dom::query_selector(&block, "a") {
        selectors.insert(
            Field::Website,
            format!("{block_selector} {}", utils::element_selector(&link)),
        );
    }
    selectors.insert(Field::Bio, format!("{block_selector} span"));
    Ok(())
}

/// Example photo and video posts, and one selector matching every post link.
fn find_post_links(
    doc: &Document,
    template: &Template,
    base: &Url,
    selectors: &mut SelectorSet,
) -> Result<(String, String)> {
    let mut root: Option<Selection> = None;
    let mut photo: Option<String> = None;
    let mut video: Option<String> = None;

    for img in dom::document_query_all(doc, "img[alt]") {
        let slot = if utils::attr_equals(&img, "alt", &template.video_post_alt) {
            &mut video
        } else if utils::attr_equals(&img, "alt", &template.photo_post_alt) {
            &mut photo
        } else {
            continue;
        };
        if slot.is_some() {
            continue;
        }

        let Some(link) = dom::ancestor(&img, POST_LINK_DEPTH) else {
            continue;
        };
        let Some(href) = dom::get_attribute(&link, "href") else {
            continue;
        };
        *slot = create_absolute_url(&href, base);
        if slot.is_some() && root.is_none() {
            root = dom::ancestor(&img, POST_ROOT_DEPTH);
        }

        if photo.is_some() && video.is_some() {
            break;
        }
    }

    match (root, photo, video) {
        (Some(root), Some(photo), Some(video)) => {
            selectors.insert(Field::PostLink, format!("{} a", utils::element_selector(&root)));
            Ok((photo, video))
        }
        _ => Err(Error::DiscoveryError("post-urls".to_string())),
    }
}
