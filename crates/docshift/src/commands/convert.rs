//! `docshift convert` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use docshift_config::DEFAULT_WEIGHT;
use docshift_convert::{Converter, PageMeta};
use docshift_nav::titlecase_from_stem;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Path to the markdown file.
    file: PathBuf,

    /// Title used when the file has none (default: derived from file name).
    #[arg(short, long)]
    title: Option<String>,

    /// Sidebar weight written to the front matter.
    #[arg(short, long, default_value_t = DEFAULT_WEIGHT)]
    weight: u32,

    /// Only rewrite the body, leave front matter untouched.
    #[arg(long)]
    no_front_matter: bool,
}

impl ConvertArgs {
    /// Execute the convert command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or stdout is closed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        if self.weight == 0 {
            return Err(CliError::Validation(
                "--weight must be greater than 0".to_owned(),
            ));
        }

        let text = std::fs::read_to_string(&self.file)?;
        tracing::debug!(file = %self.file.display(), bytes = text.len(), "Converting file");
        let converter = Converter::new();

        let converted = if self.no_front_matter {
            converter.convert_body(&text)
        } else {
            converter.convert(&text, &self.page_meta())
        };

        output.document(&converted)?;
        Ok(())
    }

    fn page_meta(&self) -> PageMeta {
        let title = self
            .title
            .clone()
            .unwrap_or_else(|| default_title(&self.file));
        PageMeta::new(title, self.weight)
    }
}

fn default_title(file: &Path) -> String {
    let stem = file.file_stem().unwrap_or_default().to_string_lossy();
    titlecase_from_stem(&stem)
}
