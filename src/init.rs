//!
//! This module provides initialization utilities for docsmith, such as creating default configuration files.

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for initialization operations
#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to access file {path}: {source}")]
    IoError { source: io::Error, path: String },
}

pub const DEFAULT_CONFIG: &str = r#"# docsmith configuration file

[site]
# Directory holding the markdown sources (only top-level *.md files are built)
docs-dir = "docs"

# Flat output directory for generated pages
output-dir = "public"

# Static home page copied verbatim into the output directory ("" to disable)
home-page = "index.html"

# File-name glob patterns to leave out of the build
exclude = [
    # "DRAFT_*.md",
]

[template]
# Label of the first navigation link, pointing at /
site-name = "docs"

# Footer text shown on every page
footer = ""

# Additional navigation links
nav = [
    # { label = "start", href = "/quickstart.html" },
]
"#;

/// Create a default configuration file at the specified path.
///
/// Returns `true` if the file was created, or `false` if it already exists.
///
/// # Errors
///
/// Returns an error if the file cannot be created due to permissions or other I/O errors.
pub fn create_default_config(path: &Path) -> Result<bool, InitError> {
    if path.exists() {
        return Ok(false);
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|e| InitError::IoError {
        source: e,
        path: path.display().to_string(),
    })?;

    Ok(true)
}
