//!
//! Groups consecutive list-item lines into `<ul>`/`<ol>` containers with an
//! explicit two-state loop over classified lines.
//!
//! Two behaviours are kept as-is on purpose:
//! - the closing tag is picked by looking at the last emitted line: if it
//!   holds `</li>` the run closes with `</ul>`, otherwise `</ol>`;
//! - a run still open at end of input always closes with `</ul>`.
//!
//! Since every line emitted inside a run is an item, runs close with `</ul>`
//! even when they were opened with `<ol>`. Item kinds may also change inside a
//! run without opening a new container.

use crate::protected::ProtectedBlocks;
use crate::stage::{Stage, StageCategory};
use regex::Regex;
use std::sync::LazyLock;

static ORDERED_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\. ").expect("Failed to compile ordered item regex"));

/// Classification of a single line for list grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `- item`, with the item text
    Unordered(&'a str),
    /// `1. item`, with the item text
    Ordered(&'a str),
    Other,
}

impl<'a> LineKind<'a> {
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();
        if let Some(content) = trimmed.strip_prefix("- ") {
            return LineKind::Unordered(content);
        }
        if let Some(m) = ORDERED_ITEM_REGEX.find(trimmed) {
            return LineKind::Ordered(&trimmed[m.end()..]);
        }
        LineKind::Other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    NotInList,
    InList,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListGrouping;

impl ListGrouping {
    fn closing_tag(last_emitted: Option<&String>) -> &'static str {
        match last_emitted {
            Some(line) if line.contains("</li>") => "</ul>",
            _ => "</ol>",
        }
    }
}

impl Stage for ListGrouping {
    fn name(&self) -> &'static str {
        "lists"
    }

    fn description(&self) -> &'static str {
        "Group list-item lines into list containers"
    }

    fn category(&self) -> StageCategory {
        StageCategory::Grouping
    }

    fn apply(&self, text: &str, _blocks: &mut ProtectedBlocks) -> String {
        let mut state = ListState::NotInList;
        let mut out: Vec<String> = Vec::new();

        for line in text.split('\n') {
            let (open_tag, content) = match LineKind::classify(line) {
                LineKind::Unordered(content) => ("<ul>", content),
                LineKind::Ordered(content) => ("<ol>", content),
                LineKind::Other => {
                    if state == ListState::InList {
                        out.push(Self::closing_tag(out.last()).to_string());
                        state = ListState::NotInList;
                    }
                    out.push(line.to_string());
                    continue;
                }
            };

            if state == ListState::NotInList {
                out.push(open_tag.to_string());
                state = ListState::InList;
            }
            out.push(format!("<li>{content}</li>"));
        }

        if state == ListState::InList {
            out.push("</ul>".to_string());
        }

        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        ListGrouping.apply(text, &mut ProtectedBlocks::new())
    }

    #[test]
    fn test_classify() {
        assert_eq!(LineKind::classify("- a"), LineKind::Unordered("a"));
        assert_eq!(LineKind::classify("   - a  "), LineKind::Unordered("a"));
        assert_eq!(LineKind::classify("12. twelve"), LineKind::Ordered("twelve"));
        assert_eq!(LineKind::classify("-a"), LineKind::Other);
        assert_eq!(LineKind::classify("1.a"), LineKind::Other);
        assert_eq!(LineKind::classify("-"), LineKind::Other);
        assert_eq!(LineKind::classify("text"), LineKind::Other);
    }

    #[test]
    fn test_unordered_run() {
        assert_eq!(render("- a\n- b\n- c"), "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>");
    }

    #[test]
    fn test_run_closed_by_other_line() {
        assert_eq!(
            render("- a\n- b\n\nafter"),
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n\nafter"
        );
    }

    #[test]
    fn test_ordered_run_closing_quirk() {
        // Opens with <ol>, closes with </ul> because the last line is an item
        assert_eq!(
            render("1. one\n2. two\n\ntext"),
            "<ol>\n<li>one</li>\n<li>two</li>\n</ul>\n\ntext"
        );
    }

    #[test]
    fn test_end_of_input_closes_unordered() {
        assert_eq!(render("1. one"), "<ol>\n<li>one</li>\n</ul>");
    }

    #[test]
    fn test_mixed_kinds_share_one_run() {
        assert_eq!(
            render("- a\n1. b\n- c"),
            "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>"
        );
    }

    #[test]
    fn test_two_runs() {
        assert_eq!(
            render("- a\ntext\n- b"),
            "<ul>\n<li>a</li>\n</ul>\ntext\n<ul>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn test_trailing_newline_ends_run_before_it() {
        assert_eq!(render("- a\n"), "<ul>\n<li>a</li>\n</ul>\n");
    }

    #[test]
    fn test_closing_tag_inspects_last_line() {
        assert_eq!(ListGrouping::closing_tag(Some(&"<li>x</li>".to_string())), "</ul>");
        assert_eq!(ListGrouping::closing_tag(Some(&"<ol>".to_string())), "</ol>");
        assert_eq!(ListGrouping::closing_tag(None), "</ol>");
    }

    #[test]
    fn test_no_lists_is_identity() {
        let text = "<h1>T</h1>\n\nplain";
        assert_eq!(render(text), text);
    }
}
