use crate::protected::ProtectedBlocks;
use crate::stage::{Stage, StageCategory};
use regex::Regex;
use std::sync::LazyLock;

static HR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*-{3,}[ \t]*$").expect("Failed to compile horizontal rule regex"));

/// Turns a line of three or more dashes into `<hr>`.
///
/// Runs ahead of headings and emphasis, which would otherwise treat a bare
/// `---` as a delimiter run.
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalRule;

impl Stage for HorizontalRule {
    fn name(&self) -> &'static str {
        "horizontal-rule"
    }

    fn description(&self) -> &'static str {
        "Render dash-only lines as horizontal rules"
    }

    fn category(&self) -> StageCategory {
        StageCategory::Block
    }

    fn should_skip(&self, text: &str) -> bool {
        !text.contains("---")
    }

    fn apply(&self, text: &str, _blocks: &mut ProtectedBlocks) -> String {
        HR_REGEX.replace_all(text, "<hr>").into_owned()
    }
}
