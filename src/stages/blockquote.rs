use crate::protected::ProtectedBlocks;
use crate::stage::{Stage, StageCategory};
use regex::Regex;
use std::sync::LazyLock;

static BLOCKQUOTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^> (.+)$").expect("Failed to compile blockquote regex"));

/// Renders each `> ` line as its own `<blockquote>`.
///
/// Consecutive quote lines are deliberately not merged into one element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blockquotes;

impl Stage for Blockquotes {
    fn name(&self) -> &'static str {
        "blockquotes"
    }

    fn description(&self) -> &'static str {
        "Render `> ` lines as blockquotes, one element per line"
    }

    fn category(&self) -> StageCategory {
        StageCategory::Block
    }

    fn should_skip(&self, text: &str) -> bool {
        !text.contains("> ")
    }

    fn apply(&self, text: &str, _blocks: &mut ProtectedBlocks) -> String {
        BLOCKQUOTE_REGEX
            .replace_all(text, "<blockquote>$1</blockquote>")
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        Blockquotes.apply(text, &mut ProtectedBlocks::new())
    }

    #[test]
    fn test_single_line() {
        assert_eq!(render("> quoted"), "<blockquote>quoted</blockquote>");
    }

    #[test]
    fn test_consecutive_lines_not_merged() {
        assert_eq!(
            render("> one\n> two"),
            "<blockquote>one</blockquote>\n<blockquote>two</blockquote>"
        );
    }

    #[test]
    fn test_requires_marker_space() {
        assert_eq!(render(">nospace"), ">nospace");
        assert_eq!(render("a > b"), "a > b");
    }
}
