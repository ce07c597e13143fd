//! Fallback titles for pages missing from the navigation.

/// Convert a file stem to a title.
///
/// Words are split on `-` and `_`, capitalized (first letter upper case,
/// the rest lower case) and joined with spaces.
///
/// # Examples
///
/// ```
/// use docshift_nav::titlecase_from_stem;
///
/// assert_eq!(titlecase_from_stem("proxmox-backup_server"), "Proxmox Backup Server");
/// assert_eq!(titlecase_from_stem("VLAN-setup"), "Vlan Setup");
/// ```
#[must_use]
pub fn titlecase_from_stem(stem: &str) -> String {
    let mut result = String::with_capacity(stem.len());
    for word in stem.split(['-', '_']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        capitalize_into(word, &mut result);
    }
    result
}

fn capitalize_into(word: &str, buf: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        buf.extend(first.to_uppercase());
        buf.extend(chars.flat_map(char::to_lowercase));
    }
}
