//! `docshift migrate` command implementation.

use std::path::PathBuf;

use clap::Args;
use docshift_config::{CliSettings, Config};
use docshift_migrate::{HEAD_PARTIAL_PATH, Migration, MigrationReport};

use crate::error::CliError;
use crate::output::Output;

/// Follow-up work that cannot be automated, as (file, explanation) pairs.
const MANUAL_REVIEW: &[(&str, &[&str])] = &[
    (
        "assets/css/custom.css",
        &[
            "Uses Material-theme selectors (.md-typeset, .md-admonition, ...) that",
            "don't exist in Hextra. Update colour variables and replace them.",
        ],
    ),
    (
        "static/js/extra.js",
        &[
            "Queries '.md-content h1' and similar. Update selectors to Hextra's",
            "markup (e.g. '.content h1') for AOS to work.",
        ],
    ),
    (
        "content/_index.md (home page)",
        &[
            "Uses AOS <div> wrappers and Markdown in HTML. The hextra-home layout",
            "differs from MkDocs Material; consider Hextra card/hero shortcodes.",
        ],
    ),
    (
        ":material-*: icons",
        &[
            "Stripped during migration. Replace with text, emoji, or",
            "{{< icon \"name\" >}} where applicable.",
        ],
    ),
    (
        "network-topology-diagram.html",
        &[
            "Copied to static/projects/. Links to it are left as-is;",
            "verify the URL resolves once the site is running.",
        ],
    ),
    ("Build the site", &["hugo server -D"]),
];

/// Arguments for the migrate command.
#[derive(Args)]
pub(crate) struct MigrateArgs {
    /// Local MkDocs repository (skips git clone).
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Hugo site root (default: config directory or current directory).
    #[arg(short, long)]
    dest: Option<PathBuf>,

    /// Repository to clone (overrides config).
    #[arg(long, env = "DOCSHIFT_REPO_URL")]
    repo_url: Option<String>,

    /// Weight of pages missing from the navigation (overrides config).
    #[arg(long)]
    default_weight: Option<u32>,

    /// Path to configuration file (default: auto-discover docshift.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (show INFO logs).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl MigrateArgs {
    /// Execute the migrate command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the migration fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_path: self.source.clone(),
            site_root: self.dest.clone(),
            repo_url: self.repo_url.clone(),
            default_weight: self.default_weight,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        match &config.config_path {
            Some(path) => tracing::info!(path = %path.display(), "Loaded configuration"),
            None => tracing::info!("No configuration file found, using defaults"),
        }

        match &config.source_resolved.path {
            Some(path) => output.info(&format!("Source: {}", path.display())),
            None => output.info(&format!("Cloning {}...", config.source_resolved.repo_url)),
        }
        output.info(&format!(
            "Hugo root: {}",
            config.site_resolved.root.display()
        ));

        let report = Migration::new(config).run()?;

        print_report(&output, &report);
        print_manual_review(&output);
        Ok(())
    }
}

fn print_report(output: &Output, report: &MigrationReport) {
    output.section("Navigation");
    output.info(&format!("  Found {} navigation entries", report.nav_entries));

    output.section("Static assets");
    if report.assets.is_empty() {
        output.detail("  No assets found");
    }
    for asset in &report.assets {
        output.info(&format!(
            "  copied    {}  ({} files)",
            asset.dest.display(),
            asset.files
        ));
    }
    if report.head_partial_created {
        output.info(&format!("  created   {HEAD_PARTIAL_PATH}"));
    } else {
        output.detail(&format!("  skipped   {HEAD_PARTIAL_PATH}  (already exists)"));
    }

    output.section("Markdown files");
    for page in &report.pages {
        output.info(&format!(
            "  migrated  {:<45} -> {}",
            page.source,
            page.dest.display()
        ));
    }

    output.section("Section indexes");
    if report.sections_created.is_empty() {
        output.detail("  All section indexes already exist");
    }
    for section in &report.sections_created {
        output.info(&format!("  created   {}", section.display()));
    }

    output.section("Migration complete");
    output.success(&format!("  Migrated : {} Markdown files", report.pages.len()));
    output.info(&format!("  Hugo root: {}", report.site_root.display()));
    if let Some(url) = &report.cloned_from {
        output.detail(&format!("  Source   : {url} (temporary clone removed)"));
    }
}

fn print_manual_review(output: &Output) {
    output.section("Manual review needed");
    for (idx, (item, lines)) in MANUAL_REVIEW.iter().enumerate() {
        output.warning(&format!("  {}. {item}", idx + 1));
        for line in *lines {
            output.info(&format!("     {line}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: MigrateArgs,
    }

    #[test]
    fn test_parse_args() {
        let cli = TestCli::parse_from([
            "docshift",
            "--source",
            "/src/lab-docs",
            "--dest",
            "site",
            "--default-weight",
            "50",
            "-v",
        ]);

        assert_eq!(cli.args.source, Some(PathBuf::from("/src/lab-docs")));
        assert_eq!(cli.args.dest, Some(PathBuf::from("site")));
        assert_eq!(cli.args.default_weight, Some(50));
        assert!(cli.args.verbose);
        assert!(cli.args.config.is_none());
    }

    #[test]
    fn test_manual_review_items() {
        assert_eq!(MANUAL_REVIEW.len(), 6);
        assert!(MANUAL_REVIEW.iter().all(|(_, lines)| !lines.is_empty()));
    }
}
