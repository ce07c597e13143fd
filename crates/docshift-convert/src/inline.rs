//! Inline annotations without a Hextra equivalent.
//!
//! - `attr_list` button classes: `[Start](guide.md){ .md-button .md-button--primary }`
//! - Material icon shortcodes: `:material-guitar:`, `:fontawesome-brands-github:`

use std::sync::LazyLock;

use regex::Regex;

static BUTTON_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\{\s*\.md-button[^}]*\}").unwrap());

static LINK_ICON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[:(?:material|fontawesome)-[a-z0-9-]+:\s*([^\]]+)\]").unwrap()
});

static ICON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(?:material|fontawesome)-[a-z0-9-]+:").unwrap());

/// Remove `{ .md-button ... }` attribute lists and the whitespace before them.
#[must_use]
pub fn strip_button_attrs(text: &str) -> String {
    BUTTON_ATTR_RE.replace_all(text, "").into_owned()
}

/// Remove Material and Font Awesome icon shortcodes.
///
/// An icon leading a link's text is dropped together with the whitespace
/// after it, keeping the label: `[:fontawesome-brands-github: GitHub](url)`
/// becomes `[GitHub](url)`. Any other icon is removed outright.
#[must_use]
pub fn strip_icons(text: &str) -> String {
    let text = LINK_ICON_RE.replace_all(text, "[$1]");
    ICON_RE.replace_all(&text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_strip_button_attrs() {
        assert_eq!(
            strip_button_attrs("[Get started](guide.md){ .md-button }"),
            "[Get started](guide.md)"
        );
        assert_eq!(
            strip_button_attrs("[Go](x.md) { .md-button .md-button--primary target=_blank }"),
            "[Go](x.md)"
        );
        assert_eq!(strip_button_attrs("[Go](x.md){.md-button}"), "[Go](x.md)");
    }

    #[test]
    fn test_other_attrs_untouched() {
        let input = "## Heading { #custom-id }\n![img](a.png){ width=300 }";
        assert_eq!(strip_button_attrs(input), input);
    }

    #[test]
    fn test_icon_in_link_keeps_label() {
        assert_eq!(
            strip_icons("[:material-guitar: Strings](page/)"),
            "[Strings](page/)"
        );
        assert_eq!(
            strip_icons("[:fontawesome-brands-github: GitHub](https://github.com/me)"),
            "[GitHub](https://github.com/me)"
        );
    }

    #[test]
    fn test_bare_icons_removed() {
        assert_eq!(
            strip_icons("# :material-guitar-electric: Music"),
            "#  Music"
        );
        assert_eq!(strip_icons(":fontawesome-brands-linkedin:"), "");
    }

    #[test]
    fn test_unknown_icon_sets_untouched() {
        let input = ":octicons-mark-github-16: and :smile: and :material_bad:";
        assert_eq!(strip_icons(input), input);
    }

    #[test]
    fn test_icon_only_link() {
        // No label to keep: the bare icon rule still clears the token
        assert_eq!(strip_icons("[:material-home:](index/)"), "[](index/)");
    }
}
