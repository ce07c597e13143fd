//! MkDocs Material to Hugo/Hextra markdown conversion.
//!
//! This crate rewrites MkDocs-specific markdown constructs into their Hextra
//! shortcode equivalents. Each rewriter is a pure `&str -> String` function
//! that only touches the construct it targets:
//!
//! - [`convert_admonitions`]: `!!!` / `???` blocks to `callout` / `details`
//! - [`convert_tabs`]: `===` content tabs to `tabs` / `tab`
//! - [`convert_links`]: `page.md` links to directory URLs
//! - [`strip_button_attrs`]: `{ .md-button }` attribute lists
//! - [`strip_icons`]: `:material-*:` / `:fontawesome-*:` icons
//! - [`fix_image_paths`]: relative image paths to site-root paths
//! - [`merge_front_matter`]: `title` / `weight` front matter injection
//!
//! [`Converter`] chains them in the order a page needs.
//!
//! # Example
//!
//! ```
//! use docshift_convert::{PageMeta, convert_document};
//!
//! let page = "=== \"macOS\"\n    brew install hugo\n=== \"Linux\"\n    apt install hugo\n";
//! let output = convert_document(page, &PageMeta::new("Install", 3));
//!
//! assert!(output.contains("{{< tab \"macOS\" >}}\nbrew install hugo\n{{< /tab >}}"));
//! assert!(output.contains("weight: 3"));
//! ```

mod admonition;
mod frontmatter;
mod images;
mod indent;
mod inline;
mod links;
mod pipeline;
mod tabs;
mod util;

pub use admonition::{BlockHeader, Callout, Category, Fence, callout_for, convert_admonitions};
pub use frontmatter::{merge_front_matter, parse_front_matter, split_front_matter};
pub use images::{fix_image_paths, normalize_image_path};
pub use indent::{BLOCK_INDENT, IndentedBlock, collect_indented};
pub use inline::{strip_button_attrs, strip_icons};
pub use links::{convert_links, retarget};
pub use pipeline::{ConvertOptions, Converter, PageMeta, convert_document};
pub use tabs::{Tab, collect_tab_group, convert_tabs};
