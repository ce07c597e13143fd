//! Document conversion pipeline.
//!
//! Threads a page through every rewriter in a fixed order:
//!
//! 1. admonitions
//! 2. tabs
//! 3. links
//! 4. button attributes
//! 5. icons
//! 6. image paths
//! 7. front matter
//!
//! Links run before icons so that `[:material-x: Label](page.md)` is
//! retargeted while its text still carries the icon, then loses the icon.

use crate::admonition::convert_admonitions;
use crate::frontmatter::merge_front_matter;
use crate::images::fix_image_paths;
use crate::inline::{strip_button_attrs, strip_icons};
use crate::links::convert_links;
use crate::tabs::convert_tabs;

/// Navigation metadata injected into a page's front matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    /// Title used when the page has none.
    pub title: String,
    /// Sidebar ordering weight.
    pub weight: u32,
}

impl PageMeta {
    #[must_use]
    pub fn new(title: impl Into<String>, weight: u32) -> Self {
        Self {
            title: title.into(),
            weight,
        }
    }
}

/// Selects which rewriters a [`Converter`] applies.
///
/// All rewriters are enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ConvertOptions {
    pub admonitions: bool,
    pub tabs: bool,
    pub links: bool,
    pub attrs: bool,
    pub icons: bool,
    pub images: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            admonitions: true,
            tabs: true,
            links: true,
            attrs: true,
            icons: true,
            images: true,
        }
    }
}

/// Markdown dialect converter.
///
/// # Example
///
/// ```
/// use docshift_convert::{Converter, PageMeta};
///
/// let converter = Converter::new();
/// let output = converter.convert("!!! tip\n    Read [setup](setup.md).\n", &PageMeta::new("Intro", 1));
///
/// assert!(output.starts_with("---\ntitle: Intro\nweight: 1\n---\n"));
/// assert!(output.contains("{{< callout type=\"info\" >}}"));
/// assert!(output.contains("[setup](setup/)"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with every rewriter enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with the given rewriter selection.
    #[must_use]
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Rewrite the page body without touching its front matter.
    ///
    /// CRLF line endings are normalized to LF first.
    #[must_use]
    pub fn convert_body(&self, text: &str) -> String {
        let opts = self.options;
        let mut text = text.replace("\r\n", "\n");

        let passes: [(bool, fn(&str) -> String); 6] = [
            (opts.admonitions, convert_admonitions),
            (opts.tabs, convert_tabs),
            (opts.links, convert_links),
            (opts.attrs, strip_button_attrs),
            (opts.icons, strip_icons),
            (opts.images, fix_image_paths),
        ];
        for (enabled, pass) in passes {
            if enabled {
                text = pass(&text);
            }
        }

        text
    }

    /// Convert a full page, finishing with the front matter merge.
    #[must_use]
    pub fn convert(&self, text: &str, meta: &PageMeta) -> String {
        let body = self.convert_body(text);
        merge_front_matter(&body, &meta.title, meta.weight)
    }
}

/// Convert a page with every rewriter enabled.
#[must_use]
pub fn convert_document(text: &str, meta: &PageMeta) -> String {
    Converter::new().convert(text, meta)
}
