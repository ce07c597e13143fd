//! Static asset copying.

use std::fs;
use std::path::{Path, PathBuf};

use docshift_config::AssetConfig;

use crate::MigrateError;

/// Asset copied into the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedAsset {
    /// Destination, relative to the site root.
    pub dest: PathBuf,
    /// Number of files copied.
    pub files: usize,
}

/// Copy configured assets from the docs directory into the site.
///
/// Directories are copied recursively; with `replace` set, an existing
/// destination directory is removed first. Missing sources are skipped.
///
/// # Errors
///
/// Returns an error on the first failed filesystem operation.
pub fn copy_assets(
    docs_dir: &Path,
    site_root: &Path,
    assets: &[AssetConfig],
) -> Result<Vec<CopiedAsset>, MigrateError> {
    let mut copied = Vec::new();

    for asset in assets {
        let from = docs_dir.join(&asset.from);
        let to = site_root.join(&asset.to);

        let files = if from.is_dir() {
            if asset.replace && to.exists() {
                fs::remove_dir_all(&to).map_err(MigrateError::io(&to))?;
            }
            copy_dir(&from, &to)?
        } else if from.is_file() {
            copy_file(&from, &to)?;
            1
        } else {
            tracing::debug!(path = %from.display(), "Asset not found, skipping");
            continue;
        };

        tracing::info!(dest = %asset.to, files, "Copied asset");
        copied.push(CopiedAsset {
            dest: PathBuf::from(&asset.to),
            files,
        });
    }

    Ok(copied)
}

fn copy_file(from: &Path, to: &Path) -> Result<(), MigrateError> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(MigrateError::io(parent))?;
    }
    fs::copy(from, to).map_err(MigrateError::io(from))?;
    Ok(())
}

/// Copy a directory tree, returning the number of files copied.
fn copy_dir(from: &Path, to: &Path) -> Result<usize, MigrateError> {
    fs::create_dir_all(to).map_err(MigrateError::io(to))?;

    let mut files = 0;
    for entry in fs::read_dir(from).map_err(MigrateError::io(from))? {
        let entry = entry.map_err(MigrateError::io(from))?;
        let path = entry.path();
        let target = to.join(entry.file_name());
        let file_type = entry.file_type().map_err(MigrateError::io(&path))?;

        if file_type.is_dir() {
            files += copy_dir(&path, &target)?;
        } else if file_type.is_file() {
            fs::copy(&path, &target).map_err(MigrateError::io(&path))?;
            files += 1;
        }
    }

    Ok(files)
}
