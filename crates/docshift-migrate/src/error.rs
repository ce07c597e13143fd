//! Migration errors.

use std::path::{Path, PathBuf};

use docshift_nav::NavError;

/// Error that aborts a migration run.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Docs directory not found: {}", .0.display())]
    MissingDocsDir(PathBuf),
    #[error("Navigation file not found: {}", .0.display())]
    MissingNavFile(PathBuf),
    #[error("Failed to clone {url}: {message}")]
    Clone { url: String, message: String },
    #[error(transparent)]
    Nav(#[from] NavError),
}

impl MigrateError {
    /// Build a `map_err` adapter attaching `path` to an I/O error.
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + use<> {
        let path = path.to_path_buf();
        move |source| Self::Io { path, source }
    }
}
