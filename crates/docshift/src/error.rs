//! CLI error types.

use docshift_config::ConfigError;
use docshift_migrate::MigrateError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Migrate(#[from] MigrateError),

    #[error("{0}")]
    Validation(String),
}
