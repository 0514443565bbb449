//! Typed identifiers for the generator plugins this site enables.
//!
//! The external generator looks plugins up by dotted identifier. Liquid-tag
//! plugins live under the `liquid_tags.` namespace and are invoked from
//! markup tags inside content; everything else is a top-level plugin.
//!
//! ```text
//! liquid_tags.img          {% img ... %}
//! liquid_tags.notebook     {% notebook path/to/file.ipynb %}
//! series                   article series metadata
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const LIQUID_TAGS_PREFIX: &str = "liquid_tags.";

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown plugin identifier: {0}")]
pub struct PluginParseError(pub String);

/// A plugin the external generator should activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plugin {
    /// `{% img %}` image embedding.
    Img,
    /// `{% video %}` HTML5 video embedding.
    Video,
    Youtube,
    Vimeo,
    /// `{% include_code %}` source file inclusion.
    IncludeCode,
    /// `{% notebook %}` notebook-to-HTML conversion. Needs the extra header.
    Notebook,
    /// Article series grouping.
    Series,
}

impl Plugin {
    /// Every known plugin, in the order this site enables them.
    pub const ALL: [Plugin; 7] = [
        Plugin::Img,
        Plugin::Video,
        Plugin::Youtube,
        Plugin::Vimeo,
        Plugin::IncludeCode,
        Plugin::Notebook,
        Plugin::Series,
    ];

    /// Canonical identifier as the generator expects it.
    pub fn as_str(self) -> &'static str {
        match self {
            Plugin::Img => "liquid_tags.img",
            Plugin::Video => "liquid_tags.video",
            Plugin::Youtube => "liquid_tags.youtube",
            Plugin::Vimeo => "liquid_tags.vimeo",
            Plugin::IncludeCode => "liquid_tags.include_code",
            Plugin::Notebook => "liquid_tags.notebook",
            Plugin::Series => "series",
        }
    }

    pub fn is_liquid_tag(self) -> bool {
        self.as_str().starts_with(LIQUID_TAGS_PREFIX)
    }

    /// Tag name used in content markup, e.g. `include_code`.
    ///
    /// `None` for plugins that are not liquid tags.
    pub fn tag_name(self) -> Option<&'static str> {
        self.as_str().strip_prefix(LIQUID_TAGS_PREFIX)
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plugin {
    type Err = PluginParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Plugin::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PluginParseError(s.to_string()))
    }
}

impl Serialize for Plugin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Plugin {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_namespaced() {
        assert_eq!(Plugin::Img.as_str(), "liquid_tags.img");
        assert_eq!(Plugin::IncludeCode.as_str(), "liquid_tags.include_code");
        assert_eq!(Plugin::Series.as_str(), "series");
    }

    #[test]
    fn only_series_is_not_a_liquid_tag() {
        let non_liquid: Vec<Plugin> = Plugin::ALL
            .into_iter()
            .filter(|p| !p.is_liquid_tag())
            .collect();
        assert_eq!(non_liquid, vec![Plugin::Series]);
    }

    #[test]
    fn tag_name_strips_namespace() {
        assert_eq!(Plugin::Notebook.tag_name(), Some("notebook"));
        assert_eq!(Plugin::Vimeo.tag_name(), Some("vimeo"));
        assert_eq!(Plugin::Series.tag_name(), None);
    }

    #[test]
    fn parse_known_identifier() {
        assert_eq!("liquid_tags.youtube".parse::<Plugin>(), Ok(Plugin::Youtube));
        assert_eq!("series".parse::<Plugin>(), Ok(Plugin::Series));
    }

    #[test]
    fn parse_unknown_identifier_is_error() {
        let err = "liquid_tags.gist".parse::<Plugin>().unwrap_err();
        assert_eq!(err, PluginParseError("liquid_tags.gist".into()));
        assert!(err.to_string().contains("liquid_tags.gist"));
    }

    #[test]
    fn bare_tag_name_is_not_accepted() {
        assert!("notebook".parse::<Plugin>().is_err());
    }

    #[test]
    fn display_matches_identifier() {
        for plugin in Plugin::ALL {
            assert_eq!(plugin.to_string(), plugin.as_str());
        }
    }

    #[test]
    fn serializes_as_identifier_string() {
        let json = serde_json::to_string(&Plugin::IncludeCode).unwrap();
        assert_eq!(json, r#""liquid_tags.include_code""#);
        let back: Plugin = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Plugin::IncludeCode);
    }

    #[test]
    fn deserialize_rejects_unknown() {
        let result: Result<Plugin, _> = serde_json::from_str(r#""pelican_comments""#);
        assert!(result.is_err());
    }
}
