//! Profile extraction.

use dom_query::Document;

use super::{count, non_blank_text, optional, required};
use crate::dom;
use crate::error::Result;
use crate::result::Profile;
use crate::selector::{Field, SelectorSet};

/// Read a [`Profile`] from a profile page.
///
/// Display name, username and the three counts are mandatory; bio, picture
/// and website are left empty when their selectors match nothing.
pub fn extract_profile(doc: &Document, selectors: &SelectorSet, url: &str) -> Result<Profile> {
    let display_name = dom::text_content(&required(doc, selectors, Field::DisplayName)?)
        .trim()
        .to_string();
    let username = dom::text_content(&required(doc, selectors, Field::Username)?)
        .trim()
        .to_string();

    let posts = count(doc, selectors, Field::PostCount)?;
    let followers = count(doc, selectors, Field::FollowerCount)?;
    let following = count(doc, selectors, Field::FollowingCount)?;

    let mut profile = Profile {
        url: url.to_string(),
        display_name,
        username,
        bio: optional(doc, selectors, Field::Bio).and_then(|s| non_blank_text(&s)),
        img_url: optional(doc, selectors, Field::ProfileImage).and_then(|s| dom::get_attribute(&s, "src")),
        website: optional(doc, selectors, Field::Website).and_then(|s| non_blank_text(&s)),
        post_count: 0,
        post_count_str: String::new(),
        follower_count: 0,
        follower_count_str: String::new(),
        following_count: 0,
        following_count_str: String::new(),
    };
    profile.set_counts(posts, followers, following);
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn selectors() -> SelectorSet {
        let mut s = SelectorSet::new();
        s.insert(Field::DisplayName, "h1.dn");
        s.insert(Field::Username, "h2.un");
        s.insert(Field::PostCount, "ul.cnt li:first-child span");
        s.insert(Field::FollowerCount, "ul.cnt li:nth-child(2) span");
        s.insert(Field::FollowingCount, "ul.cnt li:nth-child(3) span");
        s.insert(Field::ProfileImage, "img.pp");
        s.insert(Field::Bio, "div.about span");
        s.insert(Field::Website, "div.about a.web");
        s
    }

    const PAGE: &str = r#"
        <header><img class="pp" alt="bob's profile picture" src="https://cdn/bob.jpg">
        <h2 class="un">bob</h2><h1 class="dn">Bob B</h1></header>
        <ul class="cnt">
          <li><span>1,024</span> posts</li>
          <li><span class="g" title="1,204,330"><span>1.2M</span></span> followers</li>
          <li><span>301</span> following</li>
        </ul>
        <div class="about"><span>Photographer</span></div>
    "#;

    #[test]
    fn test_extracts_profile() {
        let doc = dom::parse(PAGE);
        let profile = extract_profile(&doc, &selectors(), "https://instagram.com/bob/").expect("profile");

        assert_eq!(profile.display_name, "Bob B");
        assert_eq!(profile.username, "bob");
        assert_eq!(profile.bio.as_deref(), Some("Photographer"));
        assert_eq!(profile.img_url.as_deref(), Some("https://cdn/bob.jpg"));
        assert_eq!(profile.website, None);
        assert_eq!(profile.post_count, 1024);
        assert_eq!(profile.post_count_str, "1,024");
        assert_eq!(profile.follower_count, 1_204_330);
        assert_eq!(profile.follower_count_str, "1.2M");
        assert_eq!(profile.following_count, 301);
    }

    #[test]
    fn test_missing_username_is_extraction_error() {
        let doc = dom::parse(&PAGE.replace(r#"<h2 class="un">bob</h2>"#, ""));

        match extract_profile(&doc, &selectors(), "u") {
            Err(Error::ExtractionError(field)) => assert_eq!(field, "username"),
            other => panic!("expected ExtractionError, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_counter_is_extraction_error() {
        let doc = dom::parse(&PAGE.replace(r#"<li><span>301</span> following</li>"#, ""));

        assert!(matches!(
            extract_profile(&doc, &selectors(), "u"),
            Err(Error::ExtractionError(field)) if field == "followingCount"
        ));
    }

    #[test]
    fn test_unparseable_counter_is_parse_error() {
        let doc = dom::parse(&PAGE.replace("<span>301</span>", "<span>many</span>"));

        assert!(matches!(
            extract_profile(&doc, &selectors(), "u"),
            Err(Error::ParseError(reason)) if reason.starts_with("followingCount")
        ));
    }
}
