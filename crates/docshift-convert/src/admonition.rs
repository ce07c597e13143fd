//! Admonition conversion.
//!
//! Converts MkDocs admonitions to Hextra shortcodes:
//!
//! ```markdown
//! !!! warning "Careful"          {{< callout type="warning" >}}
//!     Do not touch.         →    **Careful**
//!
//!                                Do not touch.
//!                                {{< /callout >}}
//!
//! ??? question                   {{< details "Question" >}}
//!     Why?                  →    Why?
//!                                {{< /details >}}
//! ```
//!
//! `!!!` blocks become always-visible callouts; `???` blocks become
//! collapsible details. Bodies are emitted verbatim.

use std::sync::LazyLock;

use regex::Regex;

use crate::indent::{BLOCK_INDENT, collect_indented};

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(!{3}|\?{3})\s+(\w+)(?:\s+"([^"]*)")?\s*$"#).unwrap()
});

/// Hextra callout category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Default callout styling (no `type` attribute).
    Neutral,
    Info,
    Warning,
    Error,
}

impl Category {
    /// Value of the callout `type` attribute, `None` for the neutral style.
    #[must_use]
    pub fn as_type(self) -> Option<&'static str> {
        match self {
            Self::Neutral => None,
            Self::Info => Some("info"),
            Self::Warning => Some("warning"),
            Self::Error => Some("error"),
        }
    }
}

/// Opening fence of an admonition header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fence {
    /// `!!!` - always visible.
    Plain,
    /// `???` - collapsible.
    Collapsible,
}

/// Parsed admonition header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    pub fence: Fence,
    /// Admonition keyword, lowercased.
    pub kind: String,
    /// Explicit quoted title, if a non-empty one was given.
    pub title: Option<String>,
}

impl BlockHeader {
    /// Parse an admonition header, or `None` if the line is not one.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let caps = HEADER_RE.captures(line)?;
        let fence = if &caps[1] == "!!!" {
            Fence::Plain
        } else {
            Fence::Collapsible
        };
        let title = caps
            .get(3)
            .map(|m| m.as_str())
            .filter(|t| !t.is_empty())
            .map(str::to_owned);

        Some(Self {
            fence,
            kind: caps[2].to_lowercase(),
            title,
        })
    }
}

/// Category and fallback title for an admonition keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callout {
    pub category: Category,
    pub default_title: String,
}

/// Look up the callout style of an admonition keyword.
///
/// Unknown keywords use the neutral style and their capitalized name.
#[must_use]
pub fn callout_for(kind: &str) -> Callout {
    let kind = kind.to_lowercase();
    let (category, title) = match kind.as_str() {
        "note" => (Category::Neutral, "Note"),
        "info" => (Category::Info, "Info"),
        "tip" => (Category::Info, "Tip"),
        "hint" => (Category::Info, "Hint"),
        "warning" => (Category::Warning, "Warning"),
        "caution" => (Category::Warning, "Caution"),
        "attention" => (Category::Warning, "Attention"),
        "danger" => (Category::Error, "Danger"),
        "error" => (Category::Error, "Error"),
        "bug" => (Category::Error, "Bug"),
        "failure" => (Category::Error, "Failure"),
        "fail" => (Category::Error, "Fail"),
        "success" => (Category::Info, "Success"),
        "check" => (Category::Info, "Check"),
        "done" => (Category::Info, "Done"),
        "question" => (Category::Neutral, "Question"),
        "faq" => (Category::Neutral, "FAQ"),
        "quote" => (Category::Neutral, "Quote"),
        "abstract" => (Category::Info, "Abstract"),
        "summary" => (Category::Info, "Summary"),
        "example" => (Category::Neutral, "Example"),
        _ => {
            return Callout {
                category: Category::Neutral,
                default_title: capitalize(&kind),
            };
        }
    };
    Callout {
        category,
        default_title: title.to_owned(),
    }
}

/// Convert all top-level admonitions in `text`.
#[must_use]
pub fn convert_admonitions(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut idx = 0;

    while idx < lines.len() {
        let Some(header) = BlockHeader::parse(lines[idx]) else {
            out.push(lines[idx].to_owned());
            idx += 1;
            continue;
        };

        let block = collect_indented(&lines, idx + 1, BLOCK_INDENT);
        idx = block.next;
        emit_block(&header, &block.lines, &mut out);
    }

    out.join("\n")
}

fn emit_block(header: &BlockHeader, body: &[&str], out: &mut Vec<String>) {
    let callout = callout_for(&header.kind);

    match header.fence {
        Fence::Plain => {
            out.push(match callout.category.as_type() {
                Some(ty) => format!("{{{{< callout type=\"{ty}\" >}}}}"),
                None => "{{< callout >}}".to_owned(),
            });
            if let Some(title) = &header.title {
                out.push(format!("**{title}**"));
                out.push(String::new());
            }
            out.extend(body.iter().map(|l| (*l).to_owned()));
            out.push("{{< /callout >}}".to_owned());
        }
        Fence::Collapsible => {
            let title = header.title.as_deref().unwrap_or(&callout.default_title);
            out.push(format!("{{{{< details \"{title}\" >}}}}"));
            out.extend(body.iter().map(|l| (*l).to_owned()));
            out.push("{{< /details >}}".to_owned());
        }
    }

    out.push(String::new());
}

/// Uppercase the first character of a word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
