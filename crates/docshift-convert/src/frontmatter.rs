//! YAML front matter merging.
//!
//! Every converted page needs `title` and `weight` for Hextra's sidebar. The
//! merge keeps whatever metadata the page already has: `title` is only added
//! when missing, `weight` always reflects the navigation order.

use serde_yaml::{Mapping, Value};

/// Front matter delimiter line.
const DELIMITER: &str = "---";

/// Split a document into its front matter block and body.
///
/// Returns `(Some(yaml), body)` when the text starts with a `---` line and a
/// later `---` line closes the block, `(None, text)` otherwise.
#[must_use]
pub fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return (None, text);
    };
    if first.trim_end() != DELIMITER {
        return (None, text);
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            let yaml = &text[yaml_start..offset];
            let body = &text[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }

    (None, text)
}

/// Parse a front matter block into a mapping.
///
/// Malformed YAML or a block that is not a mapping yields an empty mapping;
/// existing metadata is never a reason to fail a page.
#[must_use]
pub fn parse_front_matter(yaml: &str) -> Mapping {
    if yaml.trim().is_empty() {
        return Mapping::new();
    }
    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(mapping)) => mapping,
        Ok(Value::Null) => Mapping::new(),
        Ok(other) => {
            tracing::warn!(kind = value_kind(&other), "Front matter is not a mapping, replacing it");
            Mapping::new()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse front matter, replacing it");
            Mapping::new()
        }
    }
}

/// Inject `title` (if absent) and `weight` into the document's front matter.
///
/// The result always starts with a front matter block, followed by one blank
/// line and the body with its leading blank lines removed.
///
/// # Example
///
/// ```
/// use docshift_convert::merge_front_matter;
///
/// let out = merge_front_matter("---\ntitle: Kept\n---\n\n# Body\n", "Ignored", 3);
/// assert_eq!(out, "---\ntitle: Kept\nweight: 3\n---\n\n# Body\n");
/// ```
#[must_use]
pub fn merge_front_matter(text: &str, title: &str, weight: u32) -> String {
    let (yaml, body) = split_front_matter(text);
    let mut mapping = yaml.map(parse_front_matter).unwrap_or_default();

    if !mapping.contains_key("title") {
        mapping.insert(Value::from("title"), Value::from(title));
    }
    mapping.insert(Value::from("weight"), Value::from(weight));

    format!(
        "{DELIMITER}\n{}\n{DELIMITER}\n\n{}",
        serialize(&mapping),
        strip_leading_blank_lines(body)
    )
}

/// Serialize front matter as block-style YAML without a trailing newline.
fn serialize(mapping: &Mapping) -> String {
    match serde_yaml::to_string(mapping) {
        Ok(yaml) => yaml.trim_end().to_owned(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serialize front matter");
            String::new()
        }
    }
}

fn strip_leading_blank_lines(body: &str) -> &str {
    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        if !line.trim().is_empty() {
            return &body[offset..];
        }
        offset += line.len();
    }
    ""
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
