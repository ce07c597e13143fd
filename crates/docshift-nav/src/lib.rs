//! MkDocs navigation order extraction.
//!
//! Hextra orders sidebar entries by the `weight` front matter field, while
//! MkDocs declares order through the `nav` tree in `mkdocs.yml`. This crate
//! reads that tree into a flat [`NavWeights`] map:
//!
//! ```yaml
//! nav:
//!   - Home: index.md            # index.md         -> weight 1
//!   - My Lab:                   # (section, not recorded)
//!       - Overview: lab/index.md    # lab/index.md -> weight 1
//!       - Network: lab/network.md   # lab/network.md -> weight 2
//!   - Guides: guides/index.md   # guides/index.md  -> weight 3
//! ```
//!
//! Siblings are numbered from 1 in declaration order; nested lists start a
//! fresh numbering. The map is built once and only read afterwards.

mod title;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use docshift_convert::PageMeta;
use serde_yaml::Value;

pub use title::titlecase_from_stem;

/// Navigation title and weight of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub title: String,
    pub weight: u32,
}

/// Error returned when the navigation file cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid YAML in navigation file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Docs-relative path to navigation entry mapping.
#[derive(Debug, Clone, Default)]
pub struct NavWeights {
    entries: HashMap<String, NavEntry>,
}

impl NavWeights {
    /// Load navigation weights from an `mkdocs.yml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path).map_err(|source| NavError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let weights = Self::from_mkdocs_yaml(&content)?;
        tracing::debug!(path = %path.display(), entries = weights.len(), "Loaded navigation");
        Ok(weights)
    }

    /// Parse navigation weights from `mkdocs.yml` content.
    ///
    /// Python-specific tags used by MkDocs extensions (`!!python/name:...`)
    /// are accepted and ignored. A missing or empty `nav` key gives an empty map.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid YAML.
    pub fn from_mkdocs_yaml(content: &str) -> Result<Self, NavError> {
        let config: Value = serde_yaml::from_str(content)?;
        let mut weights = Self::default();
        if let Some(Value::Sequence(items)) = config.get("nav") {
            weights.walk(items);
        }
        Ok(weights)
    }

    /// Record every `title: path` pair of a nav list, recursing into sections.
    fn walk(&mut self, items: &[Value]) {
        for (idx, item) in items.iter().enumerate() {
            let Value::Mapping(mapping) = item else {
                continue;
            };
            let weight = u32::try_from(idx + 1).unwrap_or(u32::MAX);

            for (key, value) in mapping {
                let Some(title) = key.as_str() else {
                    tracing::debug!(?key, "Skipping nav entry with non-string title");
                    continue;
                };
                match value {
                    Value::String(path) => {
                        self.entries.insert(
                            path.clone(),
                            NavEntry {
                                title: title.to_owned(),
                                weight,
                            },
                        );
                    }
                    Value::Sequence(children) => self.walk(children),
                    _ => {}
                }
            }
        }
    }

    /// Look up the navigation entry of a docs-relative path (`lab/network.md`).
    #[must_use]
    pub fn lookup(&self, rel_path: &str) -> Option<&NavEntry> {
        self.entries.get(rel_path)
    }

    /// Title and weight for a document, with fallbacks for pages missing
    /// from the navigation.
    ///
    /// The fallback title is derived from the file stem and the fallback
    /// weight is `default_weight`.
    #[must_use]
    pub fn page_meta(&self, rel_path: &str, default_weight: u32) -> PageMeta {
        let entry = self.lookup(rel_path);

        let title = entry
            .map(|e| e.title.as_str())
            .filter(|t| !t.is_empty())
            .map_or_else(|| titlecase_from_stem(file_stem(rel_path)), str::to_owned);
        let weight = entry.map_or(default_weight, |e| e.weight);

        PageMeta::new(title, weight)
    }

    /// Number of recorded documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// File name of a `/`-separated path without its extension.
fn file_stem(rel_path: &str) -> &str {
    let name = rel_path.rsplit('/').next().unwrap_or(rel_path);
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}
