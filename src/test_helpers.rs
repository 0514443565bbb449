//! Shared test utilities for the blogconf test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_site();
//! let config = SiteConfig::load(tmp.path()).unwrap();
//! assert!(config.extra_header.contains("MathJax"));
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::HEADER_FILE;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write (or overwrite) the header snippet under `root`.
pub fn write_header(root: &Path, text: &str) {
    std::fs::write(root.join(HEADER_FILE), text).unwrap();
}

/// Create the sibling theme and plugin directories the config points at.
///
/// They resolve outside the site root (`../pelican-...`), so the site itself
/// is placed one level down in `<tmp>/site` and the siblings next to it.
pub fn setup_site_with_siblings() -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let site = tmp.path().join("site");
    std::fs::create_dir_all(&site).unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, &site).unwrap();
    std::fs::create_dir_all(tmp.path().join("pelican-themes/pelican-bootstrap3")).unwrap();
    std::fs::create_dir_all(tmp.path().join("pelican-plugins")).unwrap();
    (tmp, site)
}
