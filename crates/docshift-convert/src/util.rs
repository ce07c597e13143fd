//! Shared URL helpers for the rewriters.

/// Check whether a URL starts with a scheme (`https:`, `mailto:`, `data:`).
///
/// Follows RFC 3986: a letter followed by letters, digits, `+`, `-` or `.`,
/// terminated by a colon.
pub(crate) fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Check whether a URL points outside the site (scheme or protocol-relative).
pub(crate) fn is_external(url: &str) -> bool {
    url.starts_with("//") || has_scheme(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_scheme() {
        assert!(has_scheme("https://example.com"));
        assert!(has_scheme("mailto:me@example.com"));
        assert!(has_scheme("svn+ssh://host/repo"));
        assert!(!has_scheme("guide.md"));
        assert!(!has_scheme("../setup.md"));
        assert!(!has_scheme("1abc:foo"));
        assert!(!has_scheme(":empty"));
        assert!(!has_scheme("dir/file:name.md"));
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("//cdn.example.com/x.png"));
        assert!(is_external("http://example.com"));
        assert!(!is_external("/assets/logo.png"));
        assert!(!is_external("assets/logo.png"));
    }
}
