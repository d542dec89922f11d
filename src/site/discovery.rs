//! Source file discovery for the docs directory.

use globset::GlobSet;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use super::SiteError;

/// Markdown sources found in the docs directory, split by exclusion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovered {
    pub sources: Vec<PathBuf>,
    pub excluded: Vec<PathBuf>,
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// Collect top-level `*.md` files in `docs_dir`, sorted by path.
///
/// Subdirectories and hidden files are not visited. Files whose name matches
/// `exclude` are reported separately instead of being built.
pub fn discover_sources(docs_dir: &Path, exclude: &GlobSet) -> Result<Discovered, SiteError> {
    if !docs_dir.is_dir() {
        return Err(SiteError::MissingDocsDir {
            path: docs_dir.to_path_buf(),
        });
    }

    let mut walk_builder = WalkBuilder::new(docs_dir);
    walk_builder.max_depth(Some(1)).standard_filters(false).hidden(true);

    let mut discovered = Discovered::default();
    for entry in walk_builder.build() {
        let entry = entry.map_err(|e| SiteError::Walk {
            path: docs_dir.to_path_buf(),
            message: e.to_string(),
        })?;
        let path = entry.path();
        if !entry.file_type().is_some_and(|ft| ft.is_file()) || !is_markdown(path) {
            continue;
        }

        let excluded = path.file_name().is_some_and(|name| exclude.is_match(name));
        if excluded {
            log::debug!("[discovery] Excluding {}", path.display());
            discovered.excluded.push(path.to_path_buf());
        } else {
            discovered.sources.push(path.to_path_buf());
        }
    }

    discovered.sources.sort();
    discovered.excluded.sort();
    log::debug!(
        "[discovery] Found {} sources in {} ({} excluded)",
        discovered.sources.len(),
        docs_dir.display(),
        discovered.excluded.len()
    );
    Ok(discovered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use globset::{Glob, GlobSetBuilder};
    use std::fs;
    use tempfile::tempdir;

    fn globs(patterns: &[&str]) -> GlobSet {
        let mut builder = GlobSetBuilder::new();
        for p in patterns {
            builder.add(Glob::new(p).unwrap());
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_top_level_markdown_only() {
        let dir = tempdir().unwrap();
        let base = dir.path();
        fs::write(base.join("b.md"), "# B").unwrap();
        fs::write(base.join("a.md"), "# A").unwrap();
        fs::write(base.join("notes.txt"), "x").unwrap();
        fs::write(base.join(".hidden.md"), "x").unwrap();
        fs::create_dir(base.join("nested")).unwrap();
        fs::write(base.join("nested/c.md"), "# C").unwrap();

        let found = discover_sources(base, &GlobSet::empty()).unwrap();
        assert_eq!(found.sources, vec![base.join("a.md"), base.join("b.md")]);
        assert!(found.excluded.is_empty());
    }

    #[test]
    fn test_exclude_patterns() {
        let dir = tempdir().unwrap();
        let base = dir.path();
        for name in ["guide.md", "SYSTEM_PROMPTS.md", "DRAFT_x.md"] {
            fs::write(base.join(name), "text").unwrap();
        }

        let found = discover_sources(base, &globs(&["SYSTEM_PROMPTS.md", "DRAFT_*"])).unwrap();
        assert_eq!(found.sources, vec![base.join("guide.md")]);
        assert_eq!(found.excluded, vec![base.join("DRAFT_x.md"), base.join("SYSTEM_PROMPTS.md")]);
    }

    #[test]
    fn test_missing_docs_dir() {
        let dir = tempdir().unwrap();
        let err = discover_sources(&dir.path().join("missing"), &GlobSet::empty()).unwrap_err();
        assert!(matches!(err, SiteError::MissingDocsDir { .. }));
    }
}
