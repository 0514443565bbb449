//! Pre-build diagnostics for the directories the config references.
//!
//! Loading the config never looks at these directories; the external
//! generator resolves them and fails on its own terms. `check` exists so a
//! missing theme checkout or plugin clone shows up before a long build does.
//! Every finding is a warning. Nothing here returns an error.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::SiteConfig;

/// What a checked path is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    Content,
    Static,
    Notebooks,
    Theme,
    Plugins,
}

impl PathRole {
    pub fn label(self) -> &'static str {
        match self {
            PathRole::Content => "content",
            PathRole::Static => "static",
            PathRole::Notebooks => "notebooks",
            PathRole::Theme => "theme",
            PathRole::Plugins => "plugins",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub role: PathRole,
    /// Path as written in the config, relative to its base.
    pub configured: String,
    /// Resolved location that was checked.
    pub resolved: PathBuf,
    pub exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub findings: Vec<Finding>,
    /// `*.ipynb` files found under the notebook directory.
    pub notebooks: usize,
}

impl CheckReport {
    pub fn missing(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| !f.exists)
    }

    pub fn is_clean(&self) -> bool {
        self.missing().next().is_none()
    }
}

/// Check every directory `config` references, resolved against `root`.
///
/// Static paths and the notebook dir are resolved under the content dir;
/// theme and plugin paths are resolved against `root` itself.
pub fn check(config: &SiteConfig, root: &Path) -> CheckReport {
    let paths = &config.paths;
    let content = root.join(&paths.content);
    let mut findings = Vec::new();

    findings.push(probe(PathRole::Content, &paths.content, root));
    for static_path in &paths.static_paths {
        findings.push(probe(PathRole::Static, static_path, &content));
    }
    findings.push(probe(PathRole::Notebooks, &paths.notebook_dir, &content));
    findings.push(probe(PathRole::Theme, &paths.theme, root));
    for plugin_path in &paths.plugin_paths {
        findings.push(probe(PathRole::Plugins, plugin_path, root));
    }

    for finding in findings.iter().filter(|f| !f.exists) {
        tracing::warn!(
            role = finding.role.label(),
            path = %finding.resolved.display(),
            "referenced directory not found"
        );
    }

    let notebooks = count_notebooks(&content.join(&paths.notebook_dir));
    CheckReport {
        findings,
        notebooks,
    }
}

fn probe(role: PathRole, configured: &str, base: &Path) -> Finding {
    let resolved = base.join(configured);
    Finding {
        role,
        configured: configured.to_string(),
        exists: resolved.is_dir(),
        resolved,
    }
}

/// Count notebook sources recursively. A missing dir counts as zero.
fn count_notebooks(dir: &Path) -> usize {
    if !dir.is_dir() {
        return 0;
    }
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("ipynb"))
        })
        .count()
}
