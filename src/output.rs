//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! ## Summary
//!
//! ```text
//! Ian Hawke → http://ianhawke.github.io
//!     Author: Ian Hawke
//!     Language: en (Europe/London)
//!     Pagination: 5 per page
//!     Feeds: disabled
//!
//! Social
//! 001 twitter → http://twitter.com/IanHawke
//! 002 github → http://github.com/IanHawke
//!
//! Plugins
//! 001 liquid_tags.img
//! ...
//! 007 series
//!
//! Header
//!     _nb_header.html (1234 bytes)
//! ```
//!
//! ## Check
//!
//! ```text
//! ok       content     content
//! ok       static      images
//! missing  theme       ../pelican-themes/pelican-bootstrap3
//!
//! Notebooks: 2
//! 1 directory missing
//! ```

use crate::check::CheckReport;
use crate::config::{HEADER_FILE, SiteConfig};
use crate::feeds::FeedKind;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Summary
// ============================================================================

pub fn format_summary(config: &SiteConfig) -> Vec<String> {
    let site = &config.site;
    let mut lines = vec![
        format!("{} → {}", site.sitename, site.siteurl),
        format!("{}Author: {}", indent(1), site.author),
        format!(
            "{}Language: {} ({})",
            indent(1),
            site.default_lang,
            site.timezone
        ),
        format!(
            "{}Pagination: {} per page",
            indent(1),
            config.pagination.default_pagination
        ),
    ];

    let enabled: Vec<&str> = FeedKind::ALL
        .into_iter()
        .filter(|k| config.feeds.is_enabled(*k))
        .map(|k| k.setting_name())
        .collect();
    if enabled.is_empty() {
        lines.push(format!("{}Feeds: disabled", indent(1)));
    } else {
        lines.push(format!("{}Feeds: {}", indent(1), enabled.join(", ")));
    }

    lines.push(String::new());
    lines.push("Social".to_string());
    for (i, link) in config.social.links.iter().enumerate() {
        lines.push(format!("{} {} → {}", format_index(i + 1), link.name, link.url));
    }

    lines.push(String::new());
    lines.push("Plugins".to_string());
    for (i, plugin) in config.plugins.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), plugin));
    }

    lines.push(String::new());
    lines.push("Header".to_string());
    lines.push(format!(
        "{}{} ({})",
        indent(1),
        HEADER_FILE,
        plural(config.extra_header.len(), "byte")
    ));

    lines
}

pub fn print_summary(config: &SiteConfig) {
    for line in format_summary(config) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check(report: &CheckReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .findings
        .iter()
        .map(|f| {
            let status = if f.exists { "ok" } else { "missing" };
            format!("{:<8} {:<11} {}", status, f.role.label(), f.configured)
        })
        .collect();

    lines.push(String::new());
    lines.push(format!("Notebooks: {}", report.notebooks));

    let missing = report.missing().count();
    if missing == 0 {
        lines.push("All referenced directories present".to_string());
    } else if missing == 1 {
        lines.push("1 directory missing".to_string());
    } else {
        lines.push(format!("{missing} directories missing"));
    }
    lines
}

pub fn print_check(report: &CheckReport) {
    for line in format_check(report) {
        println!("{}", line);
    }
}
