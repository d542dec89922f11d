//! Page title extraction.

use crate::stages::CodeBlockExtract;
use crate::utils::line_ending::to_lf;
use std::path::Path;

/// Text of the first `# ` heading, ignoring anything inside a fenced code
/// block.
///
/// Fences are found with the same scan the code-block extractor uses.
pub fn extract_title(markdown: &str) -> Option<String> {
    let text = to_lf(markdown);
    let fences = CodeBlockExtract::fenced_ranges(&text);
    let in_fence = |start: usize, end: usize| fences.iter().any(|r| r.start < end && start < r.end);

    let mut offset = 0;
    for line in text.split('\n') {
        let start = offset;
        offset += line.len() + 1;
        if in_fence(start, start + line.len()) {
            continue;
        }
        if let Some(title) = line.strip_prefix("# ") {
            let title = title.trim_end();
            if !title.is_empty() {
                return Some(title.to_string());
            }
        }
    }

    None
}

/// Derive a readable title from a file stem: `getting_started` becomes
/// `Getting Started`.
pub fn title_from_stem(stem: &str) -> String {
    stem.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Title for a page: its first heading, else one derived from the file name
pub fn page_title(markdown: &str, path: &Path) -> String {
    extract_title(markdown).unwrap_or_else(|| {
        let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
        title_from_stem(&stem)
    })
}
