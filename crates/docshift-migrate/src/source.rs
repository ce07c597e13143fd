//! Source repository acquisition.
//!
//! A migration reads either an existing local checkout or a shallow clone made
//! into a temporary directory. The clone lives as long as the [`Checkout`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use docshift_config::SourceConfig;
use tempfile::TempDir;

use crate::MigrateError;

/// Source repository on disk.
#[derive(Debug)]
pub enum Checkout {
    /// User-provided checkout, left untouched.
    Local(PathBuf),
    /// Shallow clone, deleted on drop.
    Cloned { url: String, dir: TempDir },
}

impl Checkout {
    /// Use the configured local path, or clone the configured repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created or
    /// `git clone` fails.
    pub fn acquire(source: &SourceConfig) -> Result<Self, MigrateError> {
        if let Some(path) = &source.path {
            tracing::info!(path = %path.display(), "Using local source");
            return Ok(Self::Local(path.clone()));
        }

        let dir = tempfile::Builder::new()
            .prefix("docshift-")
            .tempdir()
            .map_err(MigrateError::io(&std::env::temp_dir()))?;
        clone_repo(&source.repo_url, dir.path())?;

        Ok(Self::Cloned {
            url: source.repo_url.clone(),
            dir,
        })
    }

    /// Repository root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        match self {
            Self::Local(path) => path.as_path(),
            Self::Cloned { dir, .. } => dir.path(),
        }
    }

    /// Repository URL when the source was cloned.
    #[must_use]
    pub fn cloned_from(&self) -> Option<&str> {
        match self {
            Self::Local(_) => None,
            Self::Cloned { url, .. } => Some(url.as_str()),
        }
    }
}

/// Arguments of the shallow `git clone` invocation.
fn clone_args(url: &str, dest: &Path) -> Vec<OsString> {
    vec![
        "clone".into(),
        "--depth=1".into(),
        "--quiet".into(),
        url.into(),
        dest.as_os_str().to_owned(),
    ]
}

fn clone_repo(url: &str, dest: &Path) -> Result<(), MigrateError> {
    tracing::info!(url, dest = %dest.display(), "Cloning source repository");

    let output = Command::new("git")
        .args(clone_args(url, dest))
        .output()
        .map_err(|e| MigrateError::Clone {
            url: url.to_owned(),
            message: format!("failed to run git: {e}"),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(MigrateError::Clone {
            url: url.to_owned(),
            message: match stderr.trim() {
                "" => output.status.to_string(),
                msg => msg.to_owned(),
            },
        });
    }

    Ok(())
}
