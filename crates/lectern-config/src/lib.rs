//! Configuration management for Lectern.
//!
//! Parses `lectern.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.name`
//! - `site.repository`
//! - `site.commit`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content index file.
    pub index_file: Option<PathBuf>,
    /// Override markdown source directory.
    pub pages_dir: Option<PathBuf>,
    /// Override output directory for built pages.
    pub output_dir: Option<PathBuf>,
    /// Override repository URL used in edit links.
    pub repository: Option<String>,
    /// Override commit used in edit links.
    pub commit: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "lectern.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Table of contents configuration.
    pub toc: TocConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site-wide settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefix of the head site title (`"<name> <Section>"`).
    pub name: String,
    /// Repository URL. Overrides the value from the content index.
    pub repository: Option<String>,
    /// Commit or branch. Overrides the value from the content index.
    pub commit: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Uniswap".to_owned(),
            repository: None,
            commit: None,
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    index_file: Option<String>,
    pages_dir: Option<String>,
    output_dir: Option<String>,
    parent: Option<String>,
    root_index: Option<String>,
    edit_prefix: Option<String>,
    root_next: Option<RootNext>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug)]
pub struct DocsConfig {
    /// Pre-built content index (JSON).
    pub index_file: PathBuf,
    /// Directory holding the markdown sources.
    pub pages_dir: PathBuf,
    /// Directory the built pages are written to.
    pub output_dir: PathBuf,
    /// Slug prefix of pages listed in the sidebar.
    pub parent: String,
    /// Slug of the docs landing page, excluded from prev/next adjacency.
    pub root_index: String,
    /// Repository path prepended to the raw slug in edit links.
    pub edit_prefix: String,
    /// Next link shown on the landing page.
    pub root_next: Option<RootNext>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self::with_base(Path::new("."))
    }
}

impl DocsConfig {
    fn with_base(base: &Path) -> Self {
        Self {
            index_file: base.join("public/content-index.json"),
            pages_dir: base.join("src/pages"),
            output_dir: base.join("public"),
            parent: "/docs/".to_owned(),
            root_index: "/docs/v2/".to_owned(),
            edit_prefix: "/src/pages".to_owned(),
            root_next: Some(RootNext::default()),
        }
    }
}

/// Next link shown on the docs landing page instead of its natural neighbour.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RootNext {
    /// Link target slug.
    pub slug: String,
    /// Link label.
    pub title: String,
}

impl Default for RootNext {
    fn default() -> Self {
        Self {
            slug: "/docs/v2/smart-contracts/".to_owned(),
            title: "Smart Contracts".to_owned(),
        }
    }
}

/// Table of contents configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    /// Shallowest heading depth listed.
    pub min_depth: u8,
    /// Deepest heading depth listed.
    pub max_depth: u8,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            min_depth: 2,
            max_depth: 3,
        }
    }
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
        /// Config field path (e.g., "`site.commit`").
        field: String,
        /// Error message (e.g., "${`GIT_COMMIT`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a slug to be a directory-style path (`/a/b/`).
fn require_dir_slug(slug: &str, field: &str) -> Result<(), ConfigError> {
    if !slug.starts_with('/') || !slug.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field} must start and end with '/'"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `lectern.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
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
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(index_file) = &settings.index_file {
            self.docs_resolved.index_file.clone_from(index_file);
        }
        if let Some(pages_dir) = &settings.pages_dir {
            self.docs_resolved.pages_dir.clone_from(pages_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.docs_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(repository) = &settings.repository {
            self.site.repository = Some(repository.clone());
        }
        if let Some(commit) = &settings.commit {
            self.site.commit = Some(commit.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
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
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            toc: TocConfig::default(),
            docs_resolved: DocsConfig::with_base(base),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_docs()?;
        self.validate_toc()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.name, "site.name")?;
        if let Some(ref repository) = self.site.repository {
            require_non_empty(repository, "site.repository")?;
            require_http_url(repository, "site.repository")?;
        }
        if let Some(ref commit) = self.site.commit {
            require_non_empty(commit, "site.commit")?;
        }
        Ok(())
    }

    fn validate_docs(&self) -> Result<(), ConfigError> {
        let docs = &self.docs_resolved;
        require_dir_slug(&docs.parent, "docs.parent")?;
        require_dir_slug(&docs.root_index, "docs.root_index")?;
        if !docs.edit_prefix.starts_with('/') {
            return Err(ConfigError::Validation(
                "docs.edit_prefix must start with '/'".to_owned(),
            ));
        }
        if let Some(ref next) = docs.root_next {
            require_dir_slug(&next.slug, "docs.root_next.slug")?;
            require_non_empty(&next.title, "docs.root_next.title")?;
        }
        Ok(())
    }

    fn validate_toc(&self) -> Result<(), ConfigError> {
        let TocConfig {
            min_depth,
            max_depth,
        } = self.toc;
        if min_depth == 0 || max_depth > 6 {
            return Err(ConfigError::Validation(
                "toc depths must be between 1 and 6".to_owned(),
            ));
        }
        if min_depth > max_depth {
            return Err(ConfigError::Validation(format!(
                "toc.min_depth ({min_depth}) cannot exceed toc.max_depth ({max_depth})"
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.name = expand::expand_env(&self.site.name, "site.name")?;
        if let Some(ref repository) = self.site.repository {
            self.site.repository = Some(expand::expand_env(repository, "site.repository")?);
        }
        if let Some(ref commit) = self.site.commit {
            self.site.commit = Some(expand::expand_env(commit, "site.commit")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let defaults = DocsConfig::with_base(config_dir);
        let resolve = |path: Option<&str>, default: PathBuf| {
            path.map_or(default, |p| config_dir.join(p))
        };
        let raw = std::mem::take(&mut self.docs);

        self.docs_resolved = DocsConfig {
            index_file: resolve(raw.index_file.as_deref(), defaults.index_file),
            pages_dir: resolve(raw.pages_dir.as_deref(), defaults.pages_dir),
            output_dir: resolve(raw.output_dir.as_deref(), defaults.output_dir),
            parent: raw.parent.unwrap_or(defaults.parent),
            root_index: raw.root_index.unwrap_or(defaults.root_index),
            edit_prefix: raw.edit_prefix.unwrap_or(defaults.edit_prefix),
            root_next: raw.root_next.or(defaults.root_next),
        };
    }
}
