//! Image path normalization.
//!
//! Hugo serves `static/` at the site root, so image references relative to a
//! MkDocs page (`../assets/logo.png`) are re-rooted (`/assets/logo.png`).
//! Both Markdown images and raw `<img>` tags are rewritten.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::util::is_external;

static MD_IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)\s]+)\)").unwrap());

static HTML_IMG_SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img\b[^>]*?\ssrc\s*=\s*(?:"([^"]+)"|'([^']+)')"#).unwrap()
});

/// Compute the root-relative path for an image reference.
///
/// Returns `None` for rooted paths and URLs, which are left untouched.
///
/// # Examples
///
/// ```
/// use docshift_convert::normalize_image_path;
///
/// assert_eq!(normalize_image_path("../../assets/a.png").as_deref(), Some("/assets/a.png"));
/// assert_eq!(normalize_image_path("/assets/a.png"), None);
/// ```
#[must_use]
pub fn normalize_image_path(path: &str) -> Option<String> {
    if path.starts_with('/') || is_external(path) {
        return None;
    }
    let mut rest = path;
    while let Some(stripped) = rest.strip_prefix("../") {
        rest = stripped;
    }
    Some(format!("/{rest}"))
}

/// Re-root relative image paths in Markdown images and `<img>` tags.
#[must_use]
pub fn fix_image_paths(text: &str) -> String {
    let text = MD_IMAGE_RE.replace_all(text, |caps: &Captures| {
        match normalize_image_path(&caps[2]) {
            Some(path) => format!("![{}]({path})", &caps[1]),
            None => caps[0].to_owned(),
        }
    });
    rewrite_img_src(&text)
}

/// Replace `src` values of `<img>` tags in place, leaving the rest of each
/// tag byte-for-byte intact.
fn rewrite_img_src(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in HTML_IMG_SRC_RE.captures_iter(text) {
        let Some(src) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };
        let Some(path) = normalize_image_path(src.as_str()) else {
            continue;
        };
        out.push_str(&text[last..src.start()]);
        out.push_str(&path);
        last = src.end();
    }

    out.push_str(&text[last..]);
    out
}
