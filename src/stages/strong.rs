use crate::protected::ProtectedBlocks;
use crate::stage::{Stage, StageCategory};
use crate::stages::replace_outside_code_spans;
use regex::Regex;
use std::sync::LazyLock;

static STRONG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("Failed to compile strong regex"));

#[derive(Debug, Clone, Copy, Default)]
pub struct Strong;

impl Stage for Strong {
    fn name(&self) -> &'static str {
        "strong"
    }

    fn description(&self) -> &'static str {
        "Render **bold** spans"
    }

    fn category(&self) -> StageCategory {
        StageCategory::Inline
    }

    fn should_skip(&self, text: &str) -> bool {
        !text.contains("**")
    }

    fn apply(&self, text: &str, _blocks: &mut ProtectedBlocks) -> String {
        replace_outside_code_spans(text, &STRONG_REGEX, "<strong>$1</strong>")
    }
}
