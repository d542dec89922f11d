use crate::protected::ProtectedBlocks;
use crate::stage::{Stage, StageCategory};
use crate::utils::escape_html;
use regex::Regex;
use std::sync::LazyLock;

static CODE_SPAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("Failed to compile code span regex"));

/// Renders single-backtick code spans. Must run before the other inline
/// stages, which leave the inside of `<code>` alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineCode;

impl Stage for InlineCode {
    fn name(&self) -> &'static str {
        "inline-code"
    }

    fn description(&self) -> &'static str {
        "Render `code` spans"
    }

    fn category(&self) -> StageCategory {
        StageCategory::Inline
    }

    fn should_skip(&self, text: &str) -> bool {
        !text.contains('`')
    }

    fn apply(&self, text: &str, _blocks: &mut ProtectedBlocks) -> String {
        CODE_SPAN_REGEX
            .replace_all(text, |caps: &regex::Captures| format!("<code>{}</code>", escape_html(&caps[1])))
            .into_owned()
    }
}
