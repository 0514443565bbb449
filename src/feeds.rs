//! Feed generation toggles.
//!
//! Each feed kind carries an optional output path pattern. A kind is enabled
//! only when a pattern is set; there is no separate boolean, so "unset" and
//! "disabled" are the same state. This site ships with every feed off, which
//! keeps development builds free of feed churn.

use serde::{Deserialize, Serialize};

/// The feed kinds the external generator knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    AllAtom,
    CategoryAtom,
    TranslationAtom,
    AuthorAtom,
    AuthorRss,
}

impl FeedKind {
    pub const ALL: [FeedKind; 5] = [
        FeedKind::AllAtom,
        FeedKind::CategoryAtom,
        FeedKind::TranslationAtom,
        FeedKind::AuthorAtom,
        FeedKind::AuthorRss,
    ];

    /// Setting name the generator reads this toggle from.
    pub fn setting_name(self) -> &'static str {
        match self {
            FeedKind::AllAtom => "FEED_ALL_ATOM",
            FeedKind::CategoryAtom => "CATEGORY_FEED_ATOM",
            FeedKind::TranslationAtom => "TRANSLATION_FEED_ATOM",
            FeedKind::AuthorAtom => "AUTHOR_FEED_ATOM",
            FeedKind::AuthorRss => "AUTHOR_FEED_RSS",
        }
    }
}

/// Per-kind feed path patterns. `None` means the feed is not generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_atom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_atom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_atom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_atom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_rss: Option<String>,
}

impl FeedConfig {
    /// Every feed off. Equivalent to `Default`, spelled out for readability
    /// at the call site.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn pattern(&self, kind: FeedKind) -> Option<&str> {
        match kind {
            FeedKind::AllAtom => self.all_atom.as_deref(),
            FeedKind::CategoryAtom => self.category_atom.as_deref(),
            FeedKind::TranslationAtom => self.translation_atom.as_deref(),
            FeedKind::AuthorAtom => self.author_atom.as_deref(),
            FeedKind::AuthorRss => self.author_rss.as_deref(),
        }
    }

    pub fn is_enabled(&self, kind: FeedKind) -> bool {
        self.pattern(kind).is_some()
    }

    pub fn any_enabled(&self) -> bool {
        FeedKind::ALL.into_iter().any(|k| self.is_enabled(k))
    }
}
