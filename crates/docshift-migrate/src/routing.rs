//! Destination paths of migrated documents.

use std::path::PathBuf;

/// Content directory of the Hugo site.
const CONTENT_DIR: &str = "content";

/// Docs section inside the content directory.
const DOCS_SECTION: &str = "docs";

/// Destination of a document, relative to the site root.
///
/// The top-level `index.md` becomes the site home page when `home_page` is
/// set. Every other document keeps its relative path under `content/docs/`.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use docshift_migrate::route;
///
/// assert_eq!(route("index.md", true), PathBuf::from("content/_index.md"));
/// assert_eq!(route("lab/index.md", true), PathBuf::from("content/docs/lab/index.md"));
/// ```
#[must_use]
pub fn route(rel_path: &str, home_page: bool) -> PathBuf {
    let mut dest = PathBuf::from(CONTENT_DIR);
    if home_page && rel_path == "index.md" {
        dest.push("_index.md");
        return dest;
    }
    dest.push(DOCS_SECTION);
    dest.extend(rel_path.split('/'));
    dest
}
