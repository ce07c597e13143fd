//! Hugo site scaffolding: section indexes and the custom head partial.
//!
//! Both are created only when missing so hand edits survive repeated runs.

use std::fs;
use std::path::{Path, PathBuf};

use docshift_config::SectionConfig;
use serde::Serialize;

use crate::MigrateError;

/// Hextra's custom head partial, relative to the site root.
pub const HEAD_PARTIAL_PATH: &str = "layouts/_partials/custom/head.html";

/// Includes for the AOS (Animate On Scroll) assets copied from the docs.
const HEAD_PARTIAL: &str = "\
{{- /* AOS (Animate On Scroll) – migrated from MkDocs */ -}}
<link rel=\"stylesheet\" href=\"/css/aos.css\">
<script src=\"/js/aos.js\" defer></script>
<script src=\"/js/extra.js\" defer></script>
";

#[derive(Serialize)]
struct SectionFrontMatter<'a> {
    title: &'a str,
    weight: u32,
}

/// Write the custom head partial unless one exists.
///
/// Returns whether the file was created.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn create_head_partial(site_root: &Path) -> Result<bool, MigrateError> {
    let path = site_root.join(HEAD_PARTIAL_PATH);
    if path.exists() {
        tracing::info!(path = HEAD_PARTIAL_PATH, "Head partial exists, skipping");
        return Ok(false);
    }
    write_new(&path, HEAD_PARTIAL)?;
    tracing::info!(path = HEAD_PARTIAL_PATH, "Created head partial");
    Ok(true)
}

/// Write `<section>/_index.md` with title and weight unless it exists.
///
/// Returns the created file, relative to the site root.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn ensure_section_index(
    site_root: &Path,
    section: &SectionConfig,
) -> Result<Option<PathBuf>, MigrateError> {
    let rel = Path::new(&section.path).join("_index.md");
    let path = site_root.join(&rel);
    if path.exists() {
        return Ok(None);
    }

    write_new(&path, &section_index(&section.title, section.weight))?;
    tracing::info!(path = %rel.display(), "Created section index");
    Ok(Some(rel))
}

fn section_index(title: &str, weight: u32) -> String {
    let front_matter = serde_yaml::to_string(&SectionFrontMatter { title, weight })
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to serialize section front matter");
            format!("title: {title}\nweight: {weight}\n")
        });
    format!("---\n{}\n---\n", front_matter.trim_end())
}

fn write_new(path: &Path, content: &str) -> Result<(), MigrateError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(MigrateError::io(parent))?;
    }
    fs::write(path, content).map_err(MigrateError::io(path))
}
