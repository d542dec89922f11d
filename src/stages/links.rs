use crate::protected::ProtectedBlocks;
use crate::stage::{Stage, StageCategory};
use crate::stages::replace_outside_code_spans;
use regex::Regex;
use std::sync::LazyLock;

static INLINE_LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]\n]+)\]\(([^)\n]+)\)").expect("Failed to compile inline link regex"));

#[derive(Debug, Clone, Copy, Default)]
pub struct Links;

impl Stage for Links {
    fn name(&self) -> &'static str {
        "links"
    }

    fn description(&self) -> &'static str {
        "Render [text](url) as anchors"
    }

    fn category(&self) -> StageCategory {
        StageCategory::Inline
    }

    fn should_skip(&self, text: &str) -> bool {
        !text.contains("](")
    }

    fn apply(&self, text: &str, _blocks: &mut ProtectedBlocks) -> String {
        replace_outside_code_spans(text, &INLINE_LINK_REGEX, |caps: &regex::Captures| {
            // Quotes would end the attribute early
            let href = caps[2].replace('"', "&quot;");
            format!("<a href=\"{href}\">{}</a>", &caps[1])
        })
    }
}
