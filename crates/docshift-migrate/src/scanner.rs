//! Markdown document discovery by filesystem walking.

use std::fs;
use std::path::{Path, PathBuf};

use crate::MigrateError;

/// Markdown file found under the docs directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    /// Path relative to the docs directory, `/`-separated (`lab/network.md`).
    pub rel_path: String,
    /// Absolute path of the file.
    pub path: PathBuf,
}

/// Discovers Markdown files under a docs directory.
///
/// Hidden files and directories (leading `.`) are skipped, unlike a plain
/// recursive `*.md` glob, so drafts kept under `.drafts/` are not migrated.
/// Results are sorted by relative path so runs are deterministic.
pub struct Scanner {
    docs_dir: PathBuf,
}

impl Scanner {
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
        }
    }

    /// Scan the docs directory.
    ///
    /// Returns an empty Vec if the directory doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if any directory under the docs directory cannot be
    /// read, so no document is silently left out.
    pub fn scan(&self) -> Result<Vec<DocumentRef>, MigrateError> {
        let mut refs = Vec::new();
        if self.docs_dir.is_dir() {
            Self::scan_directory(&self.docs_dir, "", &mut refs)?;
        }
        refs.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
        Ok(refs)
    }

    fn scan_directory(
        dir_path: &Path,
        prefix: &str,
        refs: &mut Vec<DocumentRef>,
    ) -> Result<(), MigrateError> {
        let entries = fs::read_dir(dir_path).map_err(MigrateError::io(dir_path))?;

        for entry in entries {
            let entry = entry.map_err(MigrateError::io(dir_path))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }

            let path = entry.path();
            let rel_path = if prefix.is_empty() {
                name
            } else {
                format!("{prefix}/{name}")
            };

            let file_type = entry.file_type().map_err(MigrateError::io(&path))?;
            if file_type.is_dir() {
                Self::scan_directory(&path, &rel_path, refs)?;
            } else if path.extension().is_some_and(|e| e == "md") {
                refs.push(DocumentRef { rel_path, path });
            }
        }

        Ok(())
    }
}
