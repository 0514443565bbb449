//! Rendering the loaded config for the external generator.
//!
//! The generator introspects a flat namespace of upper-case bindings
//! (`AUTHOR`, `PLUGINS`, `EXTRA_HEADER`, ...). [`settings`] produces exactly
//! that view; [`render`] can also emit the nested record as TOML or JSON for
//! tools that prefer structure.
//!
//! ## Settings conventions
//!
//! - Unset optional values (feeds, `RELATIVE_URLS`) render as `null`.
//! - Pairs (`SOCIAL`, `LINKS`) render as two-element arrays.
//! - Plugins render as their dotted identifiers.

use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::config::SiteConfig;
use crate::feeds::FeedKind;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// Flat upper-case bindings as JSON.
    #[default]
    Settings,
    /// Nested record as TOML.
    Toml,
    /// Nested record as JSON.
    Json,
}

/// Flatten the config into the generator's binding names.
pub fn settings(config: &SiteConfig) -> Map<String, Value> {
    let site = &config.site;
    let social = &config.social;
    let paths = &config.paths;

    let mut out = Map::new();
    let mut set = |key: &str, value: Value| {
        out.insert(key.to_string(), value);
    };

    set("AUTHOR", json!(site.author));
    set("SITENAME", json!(site.sitename));
    set("SITEURL", json!(site.siteurl));
    set("GITHUB_URL", json!(site.github_url));
    set("TWITTER_URL", json!(site.twitter_url));
    set("PATH", json!(paths.content));
    set("TIMEZONE", json!(site.timezone));
    set("DEFAULT_LANG", json!(site.default_lang));

    for kind in FeedKind::ALL {
        set(kind.setting_name(), json!(config.feeds.pattern(kind)));
    }

    set(
        "LINKS",
        Value::Array(
            config
                .blogroll
                .iter()
                .map(|l| json!([l.title, l.url]))
                .collect(),
        ),
    );
    set(
        "SOCIAL",
        Value::Array(
            social
                .links
                .iter()
                .map(|l| json!([l.name, l.url]))
                .collect(),
        ),
    );
    set(
        "DEFAULT_PAGINATION",
        json!(config.pagination.default_pagination),
    );
    set("RELATIVE_URLS", json!(site.relative_urls));

    set("THEME", json!(paths.theme));
    set(
        "DISPLAY_CATEGORIES_ON_MENU",
        json!(config.display.display_categories_on_menu),
    );
    set(
        "DISPLAY_ARTICLE_INFO_ON_INDEX",
        json!(config.display.display_article_info_on_index),
    );
    set("ABOUT_ME", json!(site.about_me));
    set("CC_LICENSE", json!(site.cc_license));
    set("GITHUB_USER", json!(social.github_user));
    set("TWITTER_USERNAME", json!(social.twitter_username));
    set("STATIC_PATHS", json!(paths.static_paths));
    set("TWITTER_USER", json!(social.twitter_user));
    set("PLUGIN_PATHS", json!(paths.plugin_paths));
    set("PLUGINS", json!(config.plugins));
    set("EXTRA_HEADER", json!(config.extra_header));
    set("NOTEBOOK_DIR", json!(paths.notebook_dir));
    set("DISQUS_SITENAME", json!(site.disqus_sitename));

    out
}

/// Render the config in the requested format.
pub fn render(config: &SiteConfig, format: Format) -> Result<String, ExportError> {
    let text = match format {
        Format::Settings => serde_json::to_string_pretty(&settings(config))?,
        Format::Toml => toml::to_string(config)?,
        Format::Json => serde_json::to_string_pretty(config)?,
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig::with_header("<style>p { color: red; }</style>\n")
    }

    #[test]
    fn settings_identity_bindings() {
        let s = settings(&config());
        assert_eq!(s["AUTHOR"], "Ian Hawke");
        assert_eq!(s["SITEURL"], "http://ianhawke.github.io");
        assert_eq!(s["PATH"], "content");
        assert_eq!(s["TIMEZONE"], "Europe/London");
        assert_eq!(s["DISQUS_SITENAME"], "ianhawkeblog");
    }

    #[test]
    fn settings_feeds_are_null() {
        let s = settings(&config());
        for key in [
            "FEED_ALL_ATOM",
            "CATEGORY_FEED_ATOM",
            "TRANSLATION_FEED_ATOM",
            "AUTHOR_FEED_ATOM",
            "AUTHOR_FEED_RSS",
        ] {
            assert_eq!(s[key], Value::Null, "{key}");
        }
        assert_eq!(s["RELATIVE_URLS"], Value::Null);
    }

    #[test]
    fn settings_social_as_pairs() {
        let s = settings(&config());
        assert_eq!(
            s["SOCIAL"],
            json!([
                ["twitter", "http://twitter.com/IanHawke"],
                ["github", "http://github.com/IanHawke"]
            ])
        );
        assert_eq!(s["LINKS"], json!([]));
    }

    #[test]
    fn settings_plugins_and_paths() {
        let s = settings(&config());
        let plugins = s["PLUGINS"].as_array().unwrap();
        assert_eq!(plugins.len(), 7);
        assert_eq!(plugins[0], "liquid_tags.img");
        assert_eq!(plugins[6], "series");
        assert_eq!(s["PLUGIN_PATHS"], json!(["../pelican-plugins"]));
        assert_eq!(s["STATIC_PATHS"], json!(["images", "notebooks"]));
    }

    #[test]
    fn settings_scalars_keep_types() {
        let s = settings(&config());
        assert_eq!(s["DEFAULT_PAGINATION"], json!(5));
        assert_eq!(s["DISPLAY_CATEGORIES_ON_MENU"], json!(false));
        assert_eq!(s["DISPLAY_ARTICLE_INFO_ON_INDEX"], json!(true));
    }

    #[test]
    fn settings_extra_header_verbatim() {
        let s = settings(&config());
        assert_eq!(s["EXTRA_HEADER"], "<style>p { color: red; }</style>\n");
    }

    #[test]
    fn render_settings_is_json_object() {
        let text = render(&config(), Format::Settings).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert!(value.is_object());
        assert_eq!(value["NOTEBOOK_DIR"], "notebooks");
    }

    #[test]
    fn render_toml_has_sections() {
        let text = render(&config(), Format::Toml).unwrap();
        assert!(text.contains("[site]"));
        assert!(text.contains("[[social.links]]"));
        assert!(text.contains("default_pagination = 5"));
        assert!(!text.contains("relative_urls"));
    }

    #[test]
    fn render_json_parses_back() {
        let original = config();
        let text = render(&original, Format::Json).unwrap();
        let back: SiteConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, original);
    }
}
