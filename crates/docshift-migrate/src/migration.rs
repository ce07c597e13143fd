//! End-to-end migration run.

use std::fs;
use std::path::{Path, PathBuf};

use docshift_config::{Config, ConvertConfig};
use docshift_convert::{ConvertOptions, Converter};
use docshift_nav::NavWeights;
use rayon::prelude::*;

use crate::assets::{CopiedAsset, copy_assets};
use crate::routing::route;
use crate::scanner::{DocumentRef, Scanner};
use crate::site::{create_head_partial, ensure_section_index};
use crate::source::Checkout;
use crate::MigrateError;

/// Document written to the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigratedPage {
    /// Source path, relative to the docs directory.
    pub source: String,
    /// Destination path, relative to the site root.
    pub dest: PathBuf,
    pub title: String,
    pub weight: u32,
}

/// Outcome of a migration run.
#[derive(Debug, Clone, Default)]
pub struct MigrationReport {
    /// Hugo site root.
    pub site_root: PathBuf,
    /// Repository URL when the source was cloned.
    pub cloned_from: Option<String>,
    /// Number of documents listed in the navigation.
    pub nav_entries: usize,
    /// Migrated documents, sorted by source path.
    pub pages: Vec<MigratedPage>,
    pub assets: Vec<CopiedAsset>,
    /// Section indexes created in this run.
    pub sections_created: Vec<PathBuf>,
    /// Whether the custom head partial was created in this run.
    pub head_partial_created: bool,
}

/// MkDocs to Hugo/Hextra site migration.
///
/// # Example
///
/// ```no_run
/// use docshift_config::Config;
/// use docshift_migrate::Migration;
///
/// let config = Config::load(None, None)?;
/// let report = Migration::new(config).run()?;
/// println!("{} pages migrated", report.pages.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Migration {
    config: Config,
    converter: Converter,
}

impl Migration {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let converter = Converter::with_options(convert_options(&config.convert));
        Self { config, converter }
    }

    /// Run the migration.
    ///
    /// Pages are converted in parallel; the first failure aborts the run.
    /// A cloned source is removed when this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be acquired, the docs directory
    /// or navigation file is missing, or any file operation fails.
    pub fn run(&self) -> Result<MigrationReport, MigrateError> {
        let source = &self.config.source_resolved;
        let site_root = &self.config.site_resolved.root;

        let checkout = Checkout::acquire(source)?;
        let docs_dir = checkout.root().join(&source.docs_dir);
        let nav_file = checkout.root().join(&source.nav_file);

        if !docs_dir.is_dir() {
            return Err(MigrateError::MissingDocsDir(docs_dir));
        }
        if !nav_file.is_file() {
            return Err(MigrateError::MissingNavFile(nav_file));
        }

        let nav = NavWeights::load(&nav_file)?;
        tracing::info!(entries = nav.len(), "Read navigation");

        let assets = copy_assets(&docs_dir, site_root, &self.config.assets)?;
        let head_partial_created = create_head_partial(site_root)?;

        let documents = Scanner::new(&docs_dir).scan()?;
        tracing::info!(documents = documents.len(), "Migrating documents");

        let pages = documents
            .par_iter()
            .map(|doc| self.migrate_page(doc, &nav, site_root))
            .collect::<Result<Vec<_>, _>>()?;

        let mut sections_created = Vec::new();
        for section in &self.config.sections {
            if let Some(created) = ensure_section_index(site_root, section)? {
                sections_created.push(created);
            }
        }

        Ok(MigrationReport {
            site_root: site_root.clone(),
            cloned_from: checkout.cloned_from().map(str::to_owned),
            nav_entries: nav.len(),
            pages,
            assets,
            sections_created,
            head_partial_created,
        })
    }

    fn migrate_page(
        &self,
        doc: &DocumentRef,
        nav: &NavWeights,
        site_root: &Path,
    ) -> Result<MigratedPage, MigrateError> {
        let site = &self.config.site_resolved;
        let meta = nav.page_meta(&doc.rel_path, site.default_weight);

        let text = fs::read_to_string(&doc.path).map_err(MigrateError::io(&doc.path))?;
        let converted = self.converter.convert(&text, &meta);

        let dest = route(&doc.rel_path, site.home_page);
        let dest_path = site_root.join(&dest);
        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent).map_err(MigrateError::io(parent))?;
        }
        fs::write(&dest_path, converted).map_err(MigrateError::io(&dest_path))?;

        tracing::debug!(source = %doc.rel_path, dest = %dest.display(), "Migrated page");

        Ok(MigratedPage {
            source: doc.rel_path.clone(),
            dest,
            title: meta.title,
            weight: meta.weight,
        })
    }
}

fn convert_options(config: &ConvertConfig) -> ConvertOptions {
    ConvertOptions {
        admonitions: config.admonitions,
        tabs: config.tabs,
        links: config.links,
        attrs: config.attrs,
        icons: config.icons,
        images: config.images,
    }
}
