//! Site configuration module.
//!
//! Builds the [`SiteConfig`] record the external generator reads at startup.
//! Every value is a fixed literal except one: the extra header, which is read
//! from `_nb_header.html` next to the configuration when it is loaded.
//!
//! ## Layout
//!
//! ```text
//! site-root/
//! ├── _nb_header.html      # Injected into every page <head> (required)
//! └── content/
//!     ├── images/          # Static, copied verbatim
//!     └── notebooks/       # Static, and the notebook source dir
//! ```
//!
//! Theme and plugin directories live outside the site root
//! (`../pelican-themes/pelican-bootstrap3`, `../pelican-plugins`) and are
//! resolved by the generator, not here.
//!
//! ## Lifecycle
//!
//! The record is built once by [`SiteConfig::load`] and never mutated
//! afterwards. Loading either yields a complete record or fails with
//! [`ConfigError::MissingResource`]; there is no partial config and no
//! fallback header.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::feeds::FeedConfig;
use crate::plugins::Plugin;
use crate::types::{Link, SocialLink};

/// File holding the header snippet, relative to the site root.
pub const HEADER_FILE: &str = "_nb_header.html";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read required resource {}: {source}", path.display())]
    MissingResource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// True when the resource does not exist at all, as opposed to being
    /// unreadable or not valid UTF-8.
    pub fn is_not_found(&self) -> bool {
        match self {
            ConfigError::MissingResource { source, .. } => source.kind() == io::ErrorKind::NotFound,
        }
    }
}

/// The full configuration handed to the external generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Contents of [`HEADER_FILE`], verbatim.
    pub extra_header: String,
    /// Plugins to activate, in activation order.
    pub plugins: Vec<Plugin>,
    /// Blogroll links. Empty for this site.
    pub blogroll: Vec<Link>,
    /// Identity and metadata strings.
    pub site: SiteMeta,
    /// Social widget links and per-platform usernames.
    pub social: SocialConfig,
    /// Directories the generator resolves relative to the site root.
    pub paths: PathsConfig,
    #[serde(default)]
    pub feeds: FeedConfig,
    pub display: DisplayConfig,
    pub pagination: PaginationConfig,
}

impl SiteConfig {
    /// Load the configuration rooted at `root`.
    ///
    /// Reads `root/_nb_header.html` as UTF-8. Fails if the file is missing,
    /// unreadable, or not valid UTF-8.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let header_path = root.join(HEADER_FILE);
        let extra_header = read_header(&header_path)?;
        let config = Self::with_header(extra_header);
        tracing::info!(
            root = %root.display(),
            plugins = config.plugins.len(),
            "loaded site config"
        );
        Ok(config)
    }

    /// Build the record around an already-read header snippet.
    pub fn with_header(extra_header: impl Into<String>) -> Self {
        Self {
            extra_header: extra_header.into(),
            plugins: Plugin::ALL.to_vec(),
            blogroll: Vec::new(),
            site: SiteMeta::default(),
            social: SocialConfig::default(),
            paths: PathsConfig::default(),
            feeds: FeedConfig::disabled(),
            display: DisplayConfig::default(),
            pagination: PaginationConfig::default(),
        }
    }

    pub fn has_plugin(&self, plugin: Plugin) -> bool {
        self.plugins.contains(&plugin)
    }
}

/// Read the header snippet in full, releasing the handle before returning.
///
/// Invalid UTF-8 surfaces as an `InvalidData` I/O error and is reported the
/// same way as a missing file.
pub fn read_header(path: &Path) -> Result<String, ConfigError> {
    let read = || -> io::Result<String> {
        let mut file = fs::File::open(path)?;
        let mut text = String::new();
        file.read_to_string(&mut text)?;
        Ok(text)
    };
    let text = read().map_err(|source| ConfigError::MissingResource {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read header snippet");
    Ok(text)
}

/// Identity and metadata strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteMeta {
    pub author: String,
    pub sitename: String,
    pub siteurl: String,
    pub timezone: String,
    pub default_lang: String,
    /// Sidebar blurb shown by the theme.
    pub about_me: String,
    /// Creative Commons license tag for the footer badge.
    pub cc_license: String,
    pub github_url: String,
    pub twitter_url: String,
    /// Disqus shortname for comment threads.
    pub disqus_sitename: String,
    /// Document-relative URLs. Unset means the generator default (absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_urls: Option<bool>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            author: "Ian Hawke".to_string(),
            sitename: "Ian Hawke".to_string(),
            siteurl: "http://ianhawke.github.io".to_string(),
            timezone: "Europe/London".to_string(),
            default_lang: "en".to_string(),
            about_me: "Ian Hawke, numerical relativist, Southampton".to_string(),
            cc_license: "CC-BY".to_string(),
            github_url: "https://github.com/IanHawke".to_string(),
            twitter_url: "https://twitter.com/IanHawke".to_string(),
            disqus_sitename: "ianhawkeblog".to_string(),
            relative_urls: None,
        }
    }
}

/// Social widget links and the usernames themes use for share buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialConfig {
    pub github_user: String,
    pub twitter_username: String,
    /// Account credited in tweet share buttons.
    pub twitter_user: String,
    /// Ordered `(platform, url)` pairs.
    pub links: Vec<SocialLink>,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            github_user: "IanHawke".to_string(),
            twitter_username: "IanHawke".to_string(),
            twitter_user: "IanHawke".to_string(),
            links: vec![
                SocialLink::new("twitter", "http://twitter.com/IanHawke"),
                SocialLink::new("github", "http://github.com/IanHawke"),
            ],
        }
    }
}

/// Directories the generator resolves relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Content source directory.
    pub content: String,
    pub theme: String,
    /// Notebook source directory, relative to `content`.
    pub notebook_dir: String,
    /// Subdirectories of `content` copied verbatim into the output.
    pub static_paths: Vec<String>,
    /// Directories searched for plugins.
    pub plugin_paths: Vec<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content: "content".to_string(),
            theme: "../pelican-themes/pelican-bootstrap3".to_string(),
            notebook_dir: "notebooks".to_string(),
            // Notebooks are static too so readers can download the sources.
            static_paths: vec!["images".to_string(), "notebooks".to_string()],
            plugin_paths: vec!["../pelican-plugins".to_string()],
        }
    }
}

/// Theme display toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    pub display_categories_on_menu: bool,
    pub display_article_info_on_index: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            display_categories_on_menu: false,
            display_article_info_on_index: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaginationConfig {
    /// Articles per listing page.
    pub default_pagination: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_pagination: 5,
        }
    }
}
