//! # blogconf
//!
//! Typed site configuration for a notebook-driven static blog.
//!
//! The blog itself is built by an external static-site generator. This crate
//! owns only the parameters that generator reads at startup: who the author
//! is, where content lives, which theme and plugins to use, and the header
//! snippet that lets converted notebooks render properly.
//!
//! ```text
//! _nb_header.html ──read once──▶ SiteConfig ──export──▶ generator settings
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | The [`config::SiteConfig`] record and its one-shot load |
//! | [`feeds`] | Feed toggles, where unset means disabled |
//! | [`plugins`] | Typed plugin identifiers (`liquid_tags.*`, `series`) |
//! | [`export`] | Flat upper-case bindings, TOML and JSON renderings |
//! | [`check`] | Optional diagnostics for referenced directories |
//! | [`types`] | Social and blogroll link types |
//! | [`output`] | CLI output formatting |
//!
//! # Loading
//!
//! Everything in the record is a literal except the extra header. Loading
//! reads `_nb_header.html` from the site root in a single scoped read; if
//! the file is missing, unreadable, or not UTF-8, loading fails and no
//! record exists. There is no default header to fall back to, because the
//! notebook plugin produces unstyled output without it.
//!
//! ```no_run
//! use blogconf::config::SiteConfig;
//! use std::path::Path;
//!
//! let config = SiteConfig::load(Path::new(".")).unwrap();
//! assert_eq!(config.pagination.default_pagination, 5);
//! ```

pub mod check;
pub mod config;
pub mod export;
pub mod feeds;
pub mod output;
pub mod plugins;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
