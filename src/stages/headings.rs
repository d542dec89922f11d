use crate::protected::ProtectedBlocks;
use crate::stage::{Stage, StageCategory};
use regex::Regex;
use std::sync::LazyLock;

// Only levels 1-3 are part of the dialect; `####` and deeper fall through.
static ATX_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,3}) (.+)$").expect("Failed to compile heading regex"));

#[derive(Debug, Clone, Copy, Default)]
pub struct Headings;

impl Stage for Headings {
    fn name(&self) -> &'static str {
        "headings"
    }

    fn description(&self) -> &'static str {
        "Render `#`, `##` and `###` lines as h1-h3"
    }

    fn category(&self) -> StageCategory {
        StageCategory::Block
    }

    fn should_skip(&self, text: &str) -> bool {
        !text.contains('#')
    }

    fn apply(&self, text: &str, _blocks: &mut ProtectedBlocks) -> String {
        ATX_HEADING_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                let level = caps[1].len();
                format!("<h{level}>{}</h{level}>", &caps[2])
            })
            .into_owned()
    }
}
