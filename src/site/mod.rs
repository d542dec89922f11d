//! The build driver: turns a docs directory of markdown files into a flat
//! directory of HTML pages.

pub mod builder;
pub mod discovery;
pub mod template;
pub mod title;

pub use builder::{BuildReport, Page, SiteBuilder};
pub use discovery::{Discovered, discover_sources};
pub use template::PageTemplate;
pub use title::{extract_title, page_title, title_from_stem};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the site. The transformer itself never fails;
/// everything here is filesystem trouble.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Docs directory not found: {}", path.display())]
    MissingDocsDir { path: PathBuf },

    #[error("Home page not found: {}", path.display())]
    MissingHomePage { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read { source: io::Error, path: PathBuf },

    #[error("Failed to write {}: {source}", path.display())]
    Write { source: io::Error, path: PathBuf },

    #[error("Failed to scan {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}
