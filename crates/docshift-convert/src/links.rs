//! Internal link retargeting.
//!
//! Hugo serves every page as a directory, so links to MkDocs source files are
//! rewritten to directory URLs:
//!
//! - `[text](../dir/file.md)` → `[text](../dir/file/)`
//! - `[text](dir/index.md)` → `[text](dir/)`
//! - `[text](index.md)` → `[text](../)`
//! - external URLs, fragments and non-`.md` targets are unchanged
//!
//! Rewritten targets no longer end in `.md`, so applying the conversion twice
//! gives the same result as applying it once.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::util::is_external;

/// Source document extension.
const SOURCE_EXT: &str = ".md";

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)\s]+)\)").unwrap());

/// Rewrite links to `.md` documents in `text`.
#[must_use]
pub fn convert_links(text: &str) -> String {
    LINK_RE
        .replace_all(text, |caps: &Captures| match retarget(&caps[2]) {
            Some(url) => format!("[{}]({url})", &caps[1]),
            None => caps[0].to_owned(),
        })
        .into_owned()
}

/// Compute the destination URL for a link target.
///
/// Returns `None` when the target must be left as is.
///
/// # Examples
///
/// ```
/// use docshift_convert::retarget;
///
/// assert_eq!(retarget("../guides/setup.md").as_deref(), Some("../guides/setup/"));
/// assert_eq!(retarget("lab/index.md").as_deref(), Some("lab/"));
/// assert_eq!(retarget("https://example.com/a.md"), None);
/// ```
#[must_use]
pub fn retarget(url: &str) -> Option<String> {
    if url.starts_with('#') || is_external(url) {
        return None;
    }
    let stem = url.strip_suffix(SOURCE_EXT)?;

    if stem == "index" {
        // Pages become directories, so the sibling landing page is one level up
        return Some("../".to_owned());
    }
    if let Some(dir) = stem.strip_suffix("/index") {
        return Some(if dir.is_empty() {
            "./".to_owned()
        } else {
            format!("{dir}/")
        });
    }

    Some(format!("{stem}/"))
}
