use crate::config::{Config, SiteConfig};
use crate::pipeline::Pipeline;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::discovery::discover_sources;
use super::template::PageTemplate;
use super::title::page_title;
use super::SiteError;

/// One generated page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub source: PathBuf,
    pub output: PathBuf,
    pub title: String,
}

/// Summary of a site build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: Vec<Page>,
    /// Destination of the copied home page, if one was configured
    pub home_page: Option<PathBuf>,
    pub excluded: Vec<PathBuf>,
}

/// Renders every markdown source into the page template and writes the site
pub struct SiteBuilder {
    site: SiteConfig,
    template: PageTemplate,
    pipeline: Pipeline,
}

impl SiteBuilder {
    pub fn new(config: &Config) -> Self {
        Self {
            site: config.site.clone(),
            template: PageTemplate::from_config(&config.template),
            pipeline: Pipeline::default(),
        }
    }

    /// Build the whole site.
    ///
    /// Stops at the first failing page; pages written before the failure stay
    /// on disk.
    pub fn build(&self) -> Result<BuildReport, SiteError> {
        let start = Instant::now();
        let exclude = self.site.exclude_set()?;
        let discovered = discover_sources(&self.site.docs_dir, &exclude)?;

        fs::create_dir_all(&self.site.output_dir).map_err(|source| SiteError::Write {
            source,
            path: self.site.output_dir.clone(),
        })?;

        let home_page = self.copy_home_page()?;

        #[cfg(feature = "parallel")]
        let pages: Result<Vec<Page>, SiteError> = discovered
            .sources
            .par_iter()
            .map(|source| self.build_page(source))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let pages: Result<Vec<Page>, SiteError> =
            discovered.sources.iter().map(|source| self.build_page(source)).collect();

        let pages = pages?;
        log::info!(
            "Built {} pages into {} in {:?}",
            pages.len(),
            self.site.output_dir.display(),
            start.elapsed()
        );

        Ok(BuildReport {
            pages,
            home_page,
            excluded: discovered.excluded,
        })
    }

    /// Render a markdown source into a full page, returning the title and HTML
    pub fn render_source(&self, source: &Path) -> Result<(String, String), SiteError> {
        let markdown = fs::read_to_string(source).map_err(|e| SiteError::Read {
            source: e,
            path: source.to_path_buf(),
        })?;
        let title = page_title(&markdown, source);
        let fragment = self.pipeline.render(&markdown);
        let html = self.template.render(&title, &fragment);
        Ok((title, html))
    }

    fn build_page(&self, source: &Path) -> Result<Page, SiteError> {
        let (title, html) = self.render_source(source)?;

        // Not `with_extension`: stems like `v1.2` must keep their dots
        let mut file_name = source.file_stem().unwrap_or_default().to_os_string();
        file_name.push(".html");
        let output = self.site.output_dir.join(file_name);
        fs::write(&output, html).map_err(|e| SiteError::Write {
            source: e,
            path: output.clone(),
        })?;
        log::debug!("[builder] {} -> {}", source.display(), output.display());

        Ok(Page {
            source: source.to_path_buf(),
            output,
            title,
        })
    }

    fn copy_home_page(&self) -> Result<Option<PathBuf>, SiteError> {
        let Some(home) = self.site.home_page.as_deref() else {
            return Ok(None);
        };
        if !home.is_file() {
            return Err(SiteError::MissingHomePage {
                path: home.to_path_buf(),
            });
        }

        let file_name = home.file_name().unwrap_or_default();
        let dest = self.site.output_dir.join(file_name);
        fs::copy(home, &dest).map_err(|e| SiteError::Write {
            source: e,
            path: dest.clone(),
        })?;
        log::debug!("[builder] copied home page {} -> {}", home.display(), dest.display());
        Ok(Some(dest))
    }
}
