//! Content tab conversion.
//!
//! Converts MkDocs Material content tabs to the Hextra tabs shortcode:
//!
//! ```markdown
//! === "macOS"
//!     Install with Homebrew.
//! === "Linux"
//!     Install with apt.
//! ```
//!
//! becomes
//!
//! ```markdown
//! {{< tabs >}}
//! {{< tab "macOS" >}}
//! Install with Homebrew.
//! {{< /tab >}}
//! {{< tab "Linux" >}}
//! Install with apt.
//! {{< /tab >}}
//! {{< /tabs >}}
//! ```
//!
//! Consecutive `===` headers form one group. A header is recognized before
//! indentation is considered, so an unindented `===` line right after a tab
//! body always starts the next tab of the same group.

use std::sync::LazyLock;

use regex::Regex;

use crate::indent::{BLOCK_INDENT, collect_indented};

static TAB_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"^=== "([^"]+)""#).unwrap());

/// A single tab within a tab group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab<'a> {
    /// Display label for the tab button.
    pub label: &'a str,
    /// De-indented tab content.
    pub body: Vec<&'a str>,
}

/// Extract the label of a tab header line.
fn tab_label(line: &str) -> Option<&str> {
    TAB_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Collect the tab group starting at `start`.
///
/// Returns the tabs and the index of the first line after the group. The
/// group is empty if `lines[start]` is not a tab header.
#[must_use]
pub fn collect_tab_group<'a>(lines: &[&'a str], start: usize) -> (Vec<Tab<'a>>, usize) {
    let mut tabs = Vec::new();
    let mut idx = start;

    while let Some(label) = lines.get(idx).copied().and_then(tab_label) {
        let block = collect_indented(lines, idx + 1, BLOCK_INDENT);
        idx = block.next;
        tabs.push(Tab {
            label,
            body: block.lines,
        });
    }

    (tabs, idx)
}

/// Convert all top-level tab groups in `text`.
#[must_use]
pub fn convert_tabs(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut idx = 0;

    while idx < lines.len() {
        let (tabs, next) = collect_tab_group(&lines, idx);
        if tabs.is_empty() {
            out.push(lines[idx].to_owned());
            idx += 1;
            continue;
        }
        idx = next;

        out.push("{{< tabs >}}".to_owned());
        for tab in &tabs {
            out.push(format!("{{{{< tab \"{}\" >}}}}", tab.label));
            out.extend(tab.body.iter().map(|l| (*l).to_owned()));
            out.push("{{< /tab >}}".to_owned());
        }
        out.push("{{< /tabs >}}".to_owned());
        out.push(String::new());
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_tab_label() {
        assert_eq!(tab_label(r#"=== "macOS""#), Some("macOS"));
        assert_eq!(tab_label(r#"=== "C++" extra"#), Some("C++"));
        assert_eq!(tab_label(r#"=== "macOS и Linux""#), Some("macOS и Linux"));
    }

    #[test]
    fn test_tab_label_rejects() {
        assert_eq!(tab_label("==="), None);
        assert_eq!(tab_label(r#"=== """#), None);
        assert_eq!(tab_label("=== Unquoted"), None);
        assert_eq!(tab_label(r#"    === "Indented""#), None);
        assert_eq!(tab_label(r#"==="NoSpace""#), None);
    }

    #[test]
    fn test_three_tabs_one_group() {
        let input = "=== \"A\"\n    alpha\n=== \"B\"\n    beta\n=== \"C\"\n    gamma";
        let output = convert_tabs(input);

        assert_eq!(
            output,
            "{{< tabs >}}\n\
             {{< tab \"A\" >}}\nalpha\n{{< /tab >}}\n\
             {{< tab \"B\" >}}\nbeta\n{{< /tab >}}\n\
             {{< tab \"C\" >}}\ngamma\n{{< /tab >}}\n\
             {{< /tabs >}}\n"
        );
        assert_eq!(output.matches("{{< tabs >}}").count(), 1);
    }

    #[test]
    fn test_collect_tab_group() {
        let lines = [r#"=== "A""#, "    a1", "", "    a2", "", r#"=== "B""#, "    b1", "", "after"];
        let (tabs, next) = collect_tab_group(&lines, 0);

        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].label, "A");
        assert_eq!(tabs[0].body, vec!["a1", "", "a2"]);
        assert_eq!(tabs[1].label, "B");
        assert_eq!(tabs[1].body, vec!["b1"]);
        assert_eq!(next, 8);
    }

    #[test]
    fn test_separated_groups() {
        let input = "=== \"A\"\n    a\n\nText between.\n\n=== \"B\"\n    b\n";
        let output = convert_tabs(input);

        assert_eq!(output.matches("{{< tabs >}}").count(), 2);
        assert!(output.contains("{{< /tabs >}}\n\nText between."));
    }

    #[test]
    fn test_blank_line_between_tabs_keeps_group() {
        let input = "=== \"A\"\n    a\n\n=== \"B\"\n    b";
        let output = convert_tabs(input);

        assert_eq!(output.matches("{{< tabs >}}").count(), 1);
        assert_eq!(output.matches("{{< tab \"").count(), 2);
    }

    #[test]
    fn test_invalid_header_passes_through() {
        let input = "===\n    not a tab\n=== \"\"";
        assert_eq!(convert_tabs(input), input);
    }

    #[test]
    fn test_indented_header_absorbed_into_body() {
        let input = "=== \"A\"\n    a\n    === \"B\"\n        b";
        let output = convert_tabs(input);

        assert_eq!(output.matches("{{< tab \"").count(), 1);
        assert!(output.contains("=== \"B\"\n    b"));
    }

    #[test]
    fn test_tab_with_code_block() {
        let input = "=== \"Python\"\n    ```python\n    print(\"hi\")\n    ```\n";
        let output = convert_tabs(input);

        assert!(output.contains("{{< tab \"Python\" >}}\n```python\nprint(\"hi\")\n```\n{{< /tab >}}"));
    }

    #[test]
    fn test_empty_body_tab() {
        let output = convert_tabs("=== \"Empty\"\nnext");
        assert_eq!(
            output,
            "{{< tabs >}}\n{{< tab \"Empty\" >}}\n{{< /tab >}}\n{{< /tabs >}}\n\nnext"
        );
    }
}
