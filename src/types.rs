//! Small value types shared by the config record and its exporters.

use serde::{Deserialize, Serialize};

/// A profile link shown in the social widget, e.g. `("twitter", "http://...")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Platform name. Themes use it to pick an icon.
    pub name: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// The `(name, url)` pair form the generator consumes.
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.name, &self.url)
    }
}

/// A blogroll entry. Same shape as a social link, rendered in a different widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub title: String,
    pub url: String,
}
