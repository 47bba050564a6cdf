//! Reference facts used to calibrate selectors.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Known facts about the reference profile.
///
/// Only consulted during discovery. Loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Username shown in the profile's `h2`.
    pub username: String,
    /// Display name shown in the profile's `h1`.
    pub display_name: String,
    /// Alt text of the example video post thumbnail.
    pub video_post_alt: String,
    /// Alt text of the example photo post thumbnail and image.
    pub photo_post_alt: String,
    /// Alt text of the first post in the grid.
    pub first_post_alt: String,
}

impl Template {
    /// Parse a template from JSON and check every fact is non-blank.
    pub fn from_json(json: &str) -> Result<Self> {
        let template: Self =
            serde_json::from_str(json).map_err(|e| Error::TemplateError(e.to_string()))?;
        template.validate()?;
        Ok(template)
    }

    pub fn validate(&self) -> Result<()> {
        let facts = [
            ("username", &self.username),
            ("displayName", &self.display_name),
            ("videoPostAlt", &self.video_post_alt),
            ("photoPostAlt", &self.photo_post_alt),
            ("firstPostAlt", &self.first_post_alt),
        ];
        match facts.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(Error::TemplateError(format!("{name} is empty"))),
            None => Ok(()),
        }
    }

    /// Alt text the profile picture carries: the placeholder or the owner's.
    #[must_use]
    pub fn profile_picture_alts(&self) -> [String; 2] {
        [
            "Add a profile photo".to_string(),
            format!("{}'s profile picture", self.username),
        ]
    }
}
