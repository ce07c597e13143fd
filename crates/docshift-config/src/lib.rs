//! Configuration management for docshift.
//!
//! Parses `docshift.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Every section is
//! optional; an empty file reproduces the stock migration of the
//! `my-lab-docs` site.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Expansion
//!
//! String values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Path values (`source.path`, `site.root`) additionally expand a leading `~`.
//! Expanded fields:
//! - `source.repo_url`
//! - `source.path`
//! - `site.root`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override local source repository (skips cloning).
    pub source_path: Option<PathBuf>,
    /// Override Hugo site root.
    pub site_root: Option<PathBuf>,
    /// Override repository URL to clone.
    pub repo_url: Option<String>,
    /// Override fallback weight for pages missing from the navigation.
    pub default_weight: Option<u32>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docshift.toml";

/// Repository cloned when no local source is given.
pub const DEFAULT_REPO_URL: &str = "https://github.com/moshthesubnet/my-lab-docs.git";

/// Weight of pages that do not appear in the navigation.
pub const DEFAULT_WEIGHT: u32 = 99;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source configuration (paths are unexpanded strings from TOML).
    source: SourceConfigRaw,
    /// Site configuration (paths are unexpanded strings from TOML).
    site: SiteConfigRaw,
    /// Rewriter selection.
    pub convert: ConvertConfig,
    /// Section index pages to create.
    pub sections: Vec<SectionConfig>,
    /// Static files to copy from the docs directory.
    pub assets: Vec<AssetConfig>,

    /// Resolved source configuration (set after loading).
    #[serde(skip)]
    pub source_resolved: SourceConfig,
    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw source configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SourceConfigRaw {
    repo_url: Option<String>,
    path: Option<String>,
    docs_dir: Option<String>,
    nav_file: Option<String>,
}

/// Resolved source repository configuration.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Repository to clone when `path` is unset.
    pub repo_url: String,
    /// Existing local checkout.
    pub path: Option<PathBuf>,
    /// Docs directory, relative to the repository root.
    pub docs_dir: String,
    /// MkDocs config file, relative to the repository root.
    pub nav_file: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            repo_url: DEFAULT_REPO_URL.to_owned(),
            path: None,
            docs_dir: "docs".to_owned(),
            nav_file: "mkdocs.yml".to_owned(),
        }
    }
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    root: Option<String>,
    default_weight: Option<u32>,
    home_page: Option<bool>,
}

/// Resolved Hugo site configuration.
#[derive(Debug, Clone, Default)]
pub struct SiteConfig {
    /// Hugo site root directory.
    pub root: PathBuf,
    /// Weight of pages missing from the navigation.
    pub default_weight: u32,
    /// Route `index.md` to the site home page (`content/_index.md`).
    pub home_page: bool,
}

/// Rewriter toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ConvertConfig {
    pub admonitions: bool,
    pub tabs: bool,
    pub links: bool,
    pub attrs: bool,
    pub icons: bool,
    pub images: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            admonitions: true,
            tabs: true,
            links: true,
            attrs: true,
            icons: true,
            images: true,
        }
    }
}

/// Section index page (`<path>/_index.md`) created when missing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionConfig {
    /// Section directory, relative to the site root.
    pub path: String,
    pub title: String,
    pub weight: u32,
}

impl SectionConfig {
    fn new(path: &str, title: &str, weight: u32) -> Self {
        Self {
            path: path.to_owned(),
            title: title.to_owned(),
            weight,
        }
    }
}

/// Static file or directory copied into the site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetConfig {
    /// Source path, relative to the docs directory.
    pub from: String,
    /// Destination path, relative to the site root.
    pub to: String,
    /// Remove an existing destination directory before copying.
    #[serde(default)]
    pub replace: bool,
}

impl AssetConfig {
    fn new(from: &str, to: &str, replace: bool) -> Self {
        Self {
            from: from.to_owned(),
            to: to.to_owned(),
            replace,
        }
    }
}

fn default_sections() -> Vec<SectionConfig> {
    vec![
        SectionConfig::new("content/docs", "Documentation", 1),
        SectionConfig::new("content/docs/lab", "My Lab", 1),
        SectionConfig::new("content/docs/guides", "Guides", 2),
        SectionConfig::new("content/docs/projects", "Projects", 3),
    ]
}

fn default_assets() -> Vec<AssetConfig> {
    vec![
        AssetConfig::new("assets", "static/assets", true),
        AssetConfig::new(
            "projects/network-topology-diagram.html",
            "static/projects/network-topology-diagram.html",
            false,
        ),
        AssetConfig::new("stylesheets/extra.css", "assets/css/custom.css", false),
        AssetConfig::new("stylesheets/aos.css", "static/css/aos.css", false),
        AssetConfig::new("javascripts/aos.js", "static/js/aos.js", false),
        AssetConfig::new("javascripts/extra.js", "static/js/extra.js", false),
    ]
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`source.repo_url`").
        field: String,
        /// Error message (e.g., "${`DOCS_REPO`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a path field to stay inside its base directory.
fn require_relative(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    let path = Path::new(value);
    if path.is_absolute() || path.components().any(|c| c == std::path::Component::ParentDir) {
        return Err(ConfigError::Validation(format!(
            "{field} must be a relative path without '..': {value}"
        )));
    }
    Ok(())
}

/// Require a repository URL git can clone.
fn require_repo_url(url: &str, field: &str) -> Result<(), ConfigError> {
    const SCHEMES: [&str; 4] = ["http://", "https://", "git@", "file://"];
    require_non_empty(url, field)?;
    if !SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http://, https://, git@ or file://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docshift.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The result is
    /// validated once overrides are in place.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(path) = &settings.source_path {
            self.source_resolved.path = Some(path.clone());
        }
        if let Some(root) = &settings.site_root {
            self.site_resolved.root.clone_from(root);
        }
        if let Some(repo_url) = &settings.repo_url {
            self.source_resolved.repo_url.clone_from(repo_url);
        }
        if let Some(weight) = settings.default_weight {
            self.site_resolved.default_weight = weight;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            source: SourceConfigRaw::default(),
            site: SiteConfigRaw::default(),
            convert: ConvertConfig::default(),
            sections: default_sections(),
            assets: default_assets(),
            source_resolved: SourceConfig::default(),
            site_resolved: SiteConfig {
                root: base.to_path_buf(),
                default_weight: DEFAULT_WEIGHT,
                home_page: true,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_source()?;
        self.validate_site()?;
        Ok(())
    }

    fn validate_source(&self) -> Result<(), ConfigError> {
        let source = &self.source_resolved;
        require_relative(&source.docs_dir, "source.docs_dir")?;
        require_relative(&source.nav_file, "source.nav_file")?;

        // The URL is irrelevant when a local checkout is used
        if source.path.is_none() {
            require_repo_url(&source.repo_url, "source.repo_url")?;
        }

        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        if self.site_resolved.default_weight == 0 {
            return Err(ConfigError::Validation(
                "site.default_weight must be greater than 0".to_owned(),
            ));
        }

        for (idx, section) in self.sections.iter().enumerate() {
            require_relative(&section.path, &format!("sections[{idx}].path"))?;
            require_non_empty(&section.title, &format!("sections[{idx}].title"))?;
            if section.weight == 0 {
                return Err(ConfigError::Validation(format!(
                    "sections[{idx}].weight must be greater than 0"
                )));
            }
        }

        for (idx, asset) in self.assets.iter().enumerate() {
            require_relative(&asset.from, &format!("assets[{idx}].from"))?;
            require_relative(&asset.to, &format!("assets[{idx}].to"))?;
        }

        Ok(())
    }

    /// Expand and resolve raw values against the config directory.
    fn resolve(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let source = &self.source;
        let repo_url = match &source.repo_url {
            Some(url) => expand::expand_env(url, "source.repo_url")?,
            None => DEFAULT_REPO_URL.to_owned(),
        };
        let path = source
            .path
            .as_deref()
            .map(|p| expand::expand_path(p, "source.path").map(|p| config_dir.join(p)))
            .transpose()?;

        self.source_resolved = SourceConfig {
            repo_url,
            path,
            docs_dir: source.docs_dir.clone().unwrap_or_else(|| "docs".to_owned()),
            nav_file: source
                .nav_file
                .clone()
                .unwrap_or_else(|| "mkdocs.yml".to_owned()),
        };

        let root = match &self.site.root {
            Some(root) => config_dir.join(expand::expand_path(root, "site.root")?),
            None => config_dir.to_path_buf(),
        };
        self.site_resolved = SiteConfig {
            root,
            default_weight: self.site.default_weight.unwrap_or(DEFAULT_WEIGHT),
            home_page: self.site.home_page.unwrap_or(true),
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/site"));
        assert_eq!(config.source_resolved.repo_url, DEFAULT_REPO_URL);
        assert!(config.source_resolved.path.is_none());
        assert_eq!(config.source_resolved.docs_dir, "docs");
        assert_eq!(config.source_resolved.nav_file, "mkdocs.yml");
        assert_eq!(config.site_resolved.root, PathBuf::from("/site"));
        assert_eq!(config.site_resolved.default_weight, 99);
        assert!(config.site_resolved.home_page);
        assert_eq!(config.convert, ConvertConfig::default());
        assert_eq!(config.sections.len(), 4);
        assert_eq!(config.assets.len(), 6);
    }

    #[test]
    fn test_default_sections() {
        let config = Config::default_with_base(Path::new("/site"));
        assert_eq!(
            config.sections,
            vec![
                SectionConfig::new("content/docs", "Documentation", 1),
                SectionConfig::new("content/docs/lab", "My Lab", 1),
                SectionConfig::new("content/docs/guides", "Guides", 2),
                SectionConfig::new("content/docs/projects", "Projects", 3),
            ]
        );
    }

    #[test]
    fn test_parse_minimal_config() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve(Path::new("/project")).unwrap();

        assert_eq!(config.source_resolved.repo_url, DEFAULT_REPO_URL);
        assert_eq!(config.site_resolved.root, PathBuf::from("/project"));
        assert_eq!(config.sections.len(), 4);
        assert_eq!(config.assets[0], AssetConfig::new("assets", "static/assets", true));
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[source]
repo_url = "git@github.com:me/docs.git"
path = "../mkdocs-site"
docs_dir = "documentation"
nav_file = "site.yml"

[site]
root = "hugo"
default_weight = 500
home_page = false

[convert]
icons = false
images = false

[[sections]]
path = "content/docs"
title = "Docs"
weight = 2

[[assets]]
from = "img"
to = "static/img"
replace = true

[[assets]]
from = "theme.css"
to = "assets/css/custom.css"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve(Path::new("/project")).unwrap();

        assert_eq!(config.source_resolved.repo_url, "git@github.com:me/docs.git");
        assert_eq!(
            config.source_resolved.path,
            Some(PathBuf::from("/project/../mkdocs-site"))
        );
        assert_eq!(config.source_resolved.docs_dir, "documentation");
        assert_eq!(config.source_resolved.nav_file, "site.yml");
        assert_eq!(config.site_resolved.root, PathBuf::from("/project/hugo"));
        assert_eq!(config.site_resolved.default_weight, 500);
        assert!(!config.site_resolved.home_page);
        assert!(config.convert.admonitions);
        assert!(!config.convert.icons);
        assert!(!config.convert.images);
        assert_eq!(config.sections, vec![SectionConfig::new("content/docs", "Docs", 2)]);
        assert_eq!(
            config.assets,
            vec![
                AssetConfig::new("img", "static/img", true),
                AssetConfig::new("theme.css", "assets/css/custom.css", false),
            ]
        );
        config.validate().unwrap();
    }

    #[test]
    fn test_empty_sections_list_disables_defaults() {
        let mut config: Config = toml::from_str("sections = []\nassets = []\n").unwrap();
        config.resolve(Path::new("/project")).unwrap();
        assert!(config.sections.is_empty());
        assert!(config.assets.is_empty());
    }

    #[test]
    fn test_absolute_root_kept() {
        let mut config: Config = toml::from_str("[site]\nroot = \"/srv/hugo\"\n").unwrap();
        config.resolve(Path::new("/project")).unwrap();
        assert_eq!(config.site_resolved.root, PathBuf::from("/srv/hugo"));
    }

    #[test]
    fn test_unknown_field_type_is_parse_error() {
        let result = toml::from_str::<Config>("[site]\ndefault_weight = \"high\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_repo_url() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.source_resolved.repo_url = "ftp://example.com/docs".to_owned();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("source.repo_url"));
    }

    #[test]
    fn test_validate_ignores_repo_url_with_local_path() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.source_resolved.repo_url = String::new();
        config.source_resolved.path = Some(PathBuf::from("/src"));
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_zero_weights() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.site_resolved.default_weight = 0;
        assert!(config.validate().unwrap_err().to_string().contains("default_weight"));

        let mut config = Config::default_with_base(Path::new("/site"));
        config.sections[2].weight = 0;
        assert!(config.validate().unwrap_err().to_string().contains("sections[2].weight"));
    }

    #[test]
    fn test_validate_rejects_escaping_paths() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.assets[0].to = "../outside".to_owned();
        assert!(config.validate().unwrap_err().to_string().contains("assets[0].to"));

        let mut config = Config::default_with_base(Path::new("/site"));
        config.source_resolved.docs_dir = "/abs/docs".to_owned();
        assert!(config.validate().unwrap_err().to_string().contains("source.docs_dir"));

        let mut config = Config::default_with_base(Path::new("/site"));
        config.source_resolved.nav_file = " ".to_owned();
        assert!(config.validate().unwrap_err().to_string().contains("source.nav_file"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/site"));
        let overrides = CliSettings {
            source_path: Some(PathBuf::from("/checkout")),
            repo_url: Some("https://example.com/other.git".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.source_resolved.path, Some(PathBuf::from("/checkout")));
        assert_eq!(config.source_resolved.repo_url, "https://example.com/other.git");
        assert_eq!(config.site_resolved.root, PathBuf::from("/site")); // Unchanged
        assert_eq!(config.site_resolved.default_weight, 99); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_site() {
        let mut config = Config::default_with_base(Path::new("/site"));
        let overrides = CliSettings {
            site_root: Some(PathBuf::from("/other")),
            default_weight: Some(10),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.site_resolved.root, PathBuf::from("/other"));
        assert_eq!(config.site_resolved.default_weight, 10);
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docshift.toml");
        std::fs::write(&path, "[source]\npath = \"src\"\n\n[site]\ndefault_weight = 7\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.source_resolved.path, Some(dir.path().join("src")));
        assert_eq!(config.site_resolved.root, dir.path());
        assert_eq!(config.site_resolved.default_weight, 7);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_cli_settings_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docshift.toml");
        std::fs::write(&path, "[site]\ndefault_weight = 7\n").unwrap();
        let settings = CliSettings {
            default_weight: Some(42),
            ..Default::default()
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.site_resolved.default_weight, 42);
    }

    #[test]
    fn test_load_validates_after_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docshift.toml");
        std::fs::write(&path, "").unwrap();
        let settings = CliSettings {
            repo_url: Some("not-a-url".to_owned()),
            ..Default::default()
        };

        let result = Config::load(Some(&path), Some(&settings));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let result = Config::load(Some(Path::new("/nonexistent/docshift.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docshift.toml");
        std::fs::write(&path, "[source\n").unwrap();

        let result = Config::load(Some(&path), None);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_resolve_expands_env() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("DOCSHIFT_TEST_SITE", "/var/www/site");
        }
        let mut config: Config =
            toml::from_str("[site]\nroot = \"${DOCSHIFT_TEST_SITE}\"\n").unwrap();
        config.resolve(Path::new("/project")).unwrap();
        assert_eq!(config.site_resolved.root, PathBuf::from("/var/www/site"));
        unsafe {
            std::env::remove_var("DOCSHIFT_TEST_SITE");
        }
    }
}
