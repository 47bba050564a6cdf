//! Synthetic pages shared by the integration tests.
//!
//! Class names mimic generated ones; the structure mirrors a profile grid
//! where each thumbnail sits three levels under its link and four under the
//! row container.

#![allow(dead_code)]

use profile_scrape::browser::fixture::FixtureBrowser;
use profile_scrape::{Options, Template};

pub const BASE: &str = "https://instagram.com";

pub fn template() -> Template {
    Template {
        username: "alice".to_string(),
        display_name: "Alice A".to_string(),
        video_post_alt: "video by alice".to_string(),
        photo_post_alt: "photo by alice".to_string(),
        first_post_alt: "photo by alice".to_string(),
    }
}

pub fn quiet_options() -> Options {
    Options {
        silent: true,
        scroll_delay: std::time::Duration::ZERO,
        max_stall_iterations: 3,
        ..Options::default()
    }
}

/// One grid thumbnail linking to `/p/{id}/`.
pub fn thumbnail(id: &str, alt: &str) -> String {
    format!(
        r#"<a class="x1i10hfl" href="/p/{id}/"><div class="_aagu"><div class="_aagv x1lliihq"><img class="x5yr21d" alt="{alt}" src="https://cdn/t/{id}.jpg"></div></div></a>"#
    )
}

/// Grid rows of up to three thumbnails.
pub fn grid(thumbs: &[String]) -> String {
    thumbs
        .chunks(3)
        .map(|row| format!(r#"<div class="_ac7v  xzboxd6">{}</div>"#, row.concat()))
        .collect()
}

/// A profile page with the given facts, counters and grid thumbnails.
pub fn profile_page(username: &str, display_name: &str, counts: [&str; 3], thumbs: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>{display_name} (@{username})</title></head>
<body><main class="xvbhtw8">
  <nav><ul class="nav"><li><a href="/">Home</a></li><li><a href="/explore/">Explore</a></li></ul></nav>
  <header class="x1q0g3np">
    <div class="_aarf"><img class="_aadp xpdipgo" alt="{username}'s profile picture" src="https://cdn/{username}.jpg"></div>
    <h2 class="_aacl _aacs _aact">{username}</h2>
    <section class="_aa_h">
      <div class="_aa_i"><h1 class="_aacl _aacp _aacw">{display_name}</h1></div>
      <ul class="_aa_j x78zum5">
        <li class="_aa_5"><span class="_ac2a">{posts}</span> posts</li>
        <li class="_aa_5"><span class="_ac2a" title="{followers_title}"><span>{followers}</span></span> followers</li>
        <li class="_aa_5"><span class="_ac2a">{following}</span> following</li>
      </ul>
      <div class="_aa_c"><span class="_aacl">Coffee and cameras</span><a class="_aa_d" href="https://{username}.dev">{username}.dev</a></div>
    </section>
  </header>
  <article class="x1iyjqo2"><div class="_aabd">{grid}</div></article>
</main></body></html>"#,
        posts = counts[0],
        followers = counts[1],
        followers_title = counts[1],
        following = counts[2],
        grid = grid(thumbs),
    )
}

/// The template profile: one video and one photo example in the grid.
pub fn template_profile() -> String {
    profile_page(
        "alice",
        "Alice A",
        ["12", "34", "56"],
        &[
            thumbnail("A1", "video by alice"),
            thumbnail("A2", "photo by alice"),
            thumbnail("A3", "a sunset"),
        ],
    )
}

/// A photo post detail page.
pub fn photo_post(alt: &str, likes: &str, caption: &str, tags: &[&str]) -> String {
    let tag_links: String = tags
        .iter()
        .map(|t| format!(r#" <a class="x1i10hfl" href="/explore/tags/{t}/">#{t}</a>"#))
        .collect();
    format!(
        r#"<html><body><main>
<article class="x1iyjqo2 _aa6a">
  <div class="_aatk"><div class="_aagv x1lliihq"><img class="x5yr21d" alt="{alt}" src="https://cdn/full.jpg" srcset="https://cdn/640.jpg 640w, https://cdn/1080.jpg 1080w"></div></div>
  <div class="_ae2s">
    <section class="_ae5m">
      <div class="_aacl"><div class="_aaclike x9f619"><button class="_abl-" type="button"><span title="{likes}">{likes}</span> likes</button></div></div>
    </section>
    <div class="_ae5q"><ul class="_a9z6"><li class="_a9zj"><div><div><div class="_a9zr">alice</div><div class="_a9zs"><span class="_aacl">{caption}{tag_links}</span></div></div></div></li></ul></div>
  </div>
</article>
</main></body></html>"#
    )
}

/// A video post detail page.
pub fn video_post(views: &str) -> String {
    format!(
        r#"<html><body><main>
<article class="x1iyjqo2 _aa6a">
  <div class="_aatk"><div class="_ab1c x5yr21d"><video class="tWeCl" src="https://cdn/clip.mp4" type="video/mp4"></video></div></div>
  <div class="_ae2s">
    <section class="_ae5m">
      <div class="_aacv x1lliihq"><span class="vcOH2"><span>{views}</span> views</span></div>
    </section>
    <div class="_ae5q"><ul class="_a9z6"><li class="_a9zj"><div><div><div class="_a9zr">alice</div><div class="_a9zs"><span class="_aacl">New clip</span></div></div></div></li></ul></div>
  </div>
</article>
</main></body></html>"#
    )
}

/// Browser serving the template profile and its two example posts.
pub fn calibration_browser() -> FixtureBrowser {
    FixtureBrowser::new()
        .with_html(&format!("{BASE}/alice/"), template_profile())
        .with_html(&format!("{BASE}/p/A1/"), video_post("1,001"))
        .with_html(
            &format!("{BASE}/p/A2/"),
            photo_post("photo by alice", "2,002", "Morning", &["coffee"]),
        )
}
