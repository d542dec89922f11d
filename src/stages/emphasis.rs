use crate::protected::ProtectedBlocks;
use crate::stage::{Stage, StageCategory};
use crate::stages::replace_outside_code_spans;
use regex::Regex;
use std::sync::LazyLock;

// Lexically a subset of bold, so this stage has to run after `strong`.
static EMPHASIS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("Failed to compile emphasis regex"));

#[derive(Debug, Clone, Copy, Default)]
pub struct Emphasis;

impl Stage for Emphasis {
    fn name(&self) -> &'static str {
        "emphasis"
    }

    fn description(&self) -> &'static str {
        "Render *italic* spans"
    }

    fn category(&self) -> StageCategory {
        StageCategory::Inline
    }

    fn should_skip(&self, text: &str) -> bool {
        !text.contains('*')
    }

    fn apply(&self, text: &str, _blocks: &mut ProtectedBlocks) -> String {
        replace_outside_code_spans(text, &EMPHASIS_REGEX, "<em>$1</em>")
    }
}
