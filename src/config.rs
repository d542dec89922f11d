//!
//! Configuration structures and loading for docsmith.
//! Reads `docsmith.toml` from the working directory (or an explicit path) and
//! falls back to defaults when no file is present.

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "docsmith.toml";

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// An exclude entry is not a valid glob
    #[error("Invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// Represents the complete configuration loaded from docsmith.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub site: SiteConfig,
    pub template: TemplateConfig,
}

/// Where sources come from and where pages go
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory holding the markdown sources (not searched recursively)
    pub docs_dir: PathBuf,

    /// Flat output directory for generated pages
    pub output_dir: PathBuf,

    /// Static home page copied verbatim into the output directory; an empty
    /// string disables the copy
    pub home_page: Option<PathBuf>,

    /// File-name glob patterns to leave out of the build
    pub exclude: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            output_dir: PathBuf::from("public"),
            home_page: Some(PathBuf::from("index.html")),
            exclude: Vec::new(),
        }
    }
}

/// A navigation entry rendered at the top of every page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Page template settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct TemplateConfig {
    /// Label of the first nav link, pointing at `/`
    pub site_name: String,

    /// Footer text, HTML-escaped on output
    pub footer: String,

    pub nav: Vec<NavLink>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            site_name: "docs".to_string(),
            footer: String::new(),
            nav: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `docsmith.toml` in the working
    /// directory is used when present, defaults otherwise.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        match config_path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    log::debug!("[docsmith-config] No {CONFIG_FILE} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("[docsmith-config] Loading config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            source,
            path: path.display().to_string(),
        })?;
        let config = Self::parse(&content)?;

        // Relative paths in a config file are relative to that file
        match path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(base) => Ok(config.relative_to(base)),
            None => Ok(config),
        }
    }

    /// Parse configuration from TOML text and validate it
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        if config.site.home_page.as_deref().is_some_and(|p| p.as_os_str().is_empty()) {
            config.site.home_page = None;
        }
        config.site.exclude_set()?;
        Ok(config)
    }

    fn relative_to(mut self, base: &Path) -> Self {
        let rebase = |p: &Path| if p.is_absolute() { p.to_path_buf() } else { base.join(p) };
        self.site.docs_dir = rebase(&self.site.docs_dir);
        self.site.output_dir = rebase(&self.site.output_dir);
        self.site.home_page = self.site.home_page.as_deref().map(rebase);
        self
    }
}

impl SiteConfig {
    /// Compile the exclude patterns into a matcher over file names
    pub fn exclude_set(&self) -> Result<GlobSet, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude {
            let glob = Glob::new(pattern).map_err(|e| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|e| ConfigError::InvalidPattern {
            pattern: self.exclude.join(", "),
            message: e.to_string(),
        })
    }
}
