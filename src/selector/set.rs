//! Named selector collections produced by discovery.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Logical field a selector locates.
///
/// Ordering is the serialization order of a [`SelectorSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    DisplayName,
    Username,
    PostCount,
    FollowerCount,
    FollowingCount,
    ProfileImage,
    Bio,
    Website,
    PostLink,
    Img,
    Video,
    Description,
    Tags,
    LikeCount,
    ViewCount,
}

impl Field {
    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DisplayName => "displayName",
            Self::Username => "username",
            Self::PostCount => "postCount",
            Self::FollowerCount => "followerCount",
            Self::FollowingCount => "followingCount",
            Self::ProfileImage => "imgUrl",
            Self::Bio => "bio",
            Self::Website => "website",
            Self::PostLink => "postRootElement",
            Self::Img => "img",
            Self::Video => "video",
            Self::Description => "description",
            Self::Tags => "tags",
            Self::LikeCount => "likeCount",
            Self::ViewCount => "viewCount",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Mapping from logical field to a reusable selector string.
///
/// Built once by discovery and read-only afterwards. Iteration and
/// serialization follow [`Field`] order, so two discoveries over the same
/// document produce identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectorSet {
    selectors: BTreeMap<Field, String>,
}

impl SelectorSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selector; blank selectors are ignored.
    pub fn insert(&mut self, field: Field, selector: impl Into<String>) {
        let selector = selector.into();
        if !selector.trim().is_empty() {
            self.selectors.insert(field, selector);
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.selectors.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.selectors.contains_key(&field)
    }

    /// Selector for a field that downstream extraction cannot do without.
    pub fn require(&self, field: Field) -> Result<&str> {
        self.get(field)
            .ok_or_else(|| Error::ExtractionError(field.to_string()))
    }

    /// Fail with a discovery error naming `group` unless every field is set.
    pub fn ensure(&self, fields: &[Field], group: &str) -> Result<()> {
        if fields.iter().all(|f| self.contains(*f)) {
            Ok(())
        } else {
            Err(Error::DiscoveryError(group.to_string()))
        }
    }

    /// Copy the listed fields from `other`, overwriting existing entries.
    pub fn merge_from(&mut self, other: &Self, fields: &[Field]) {
        for field in fields {
            if let Some(selector) = other.get(*field) {
                self.insert(*field, selector);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.selectors.iter().map(|(f, s)| (*f, s.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}
