use crate::protected::{ProtectedBlocks, is_placeholder_line};
use crate::stage::{Stage, StageCategory};
use crate::utils::map_lines;

/// Wraps remaining plain-text lines in `<p>`.
///
/// Lines already starting with a tag, table-ish lines and placeholder lines
/// pass through, which is what keeps earlier stages' output intact.
#[derive(Debug, Clone, Copy, Default)]
pub struct Paragraphs;

impl Paragraphs {
    pub fn is_paragraph_line(trimmed: &str) -> bool {
        !trimmed.is_empty() && !trimmed.starts_with('<') && !trimmed.starts_with('|') && !is_placeholder_line(trimmed)
    }
}

impl Stage for Paragraphs {
    fn name(&self) -> &'static str {
        "paragraphs"
    }

    fn description(&self) -> &'static str {
        "Wrap plain-text lines in paragraphs"
    }

    fn category(&self) -> StageCategory {
        StageCategory::Wrap
    }

    fn apply(&self, text: &str, _blocks: &mut ProtectedBlocks) -> String {
        map_lines(text, |line| {
            let trimmed = line.trim();
            if Self::is_paragraph_line(trimmed) {
                format!("<p>{trimmed}</p>")
            } else {
                line.to_string()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        Paragraphs.apply(text, &mut ProtectedBlocks::new())
    }

    #[test]
    fn test_wraps_plain_lines() {
        assert_eq!(render("hello"), "<p>hello</p>");
        assert_eq!(render("  padded  "), "<p>padded</p>");
    }

    #[test]
    fn test_each_line_wrapped_separately() {
        assert_eq!(render("one\ntwo"), "<p>one</p>\n<p>two</p>");
    }

    #[test]
    fn test_passthrough_lines() {
        let text = "<h1>T</h1>\n\n| a |\n[[CODE_BLOCK_0]]\n   ";
        assert_eq!(render(text), text);
    }

    #[test]
    fn test_inline_tag_at_start_not_wrapped() {
        assert_eq!(render("<code>x</code> rest"), "<code>x</code> rest");
        assert_eq!(render("text <code>x</code>"), "<p>text <code>x</code></p>");
    }
}
