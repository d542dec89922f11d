//!
//! Lifts fenced code blocks out of the document and leaves a placeholder
//! token in their place, so no later stage can reinterpret their content.

use crate::protected::{ProtectedBlock, ProtectedBlocks, needs_shield, shield, unshield};
use crate::stage::{Stage, StageCategory};
use crate::utils::escape_html;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

// Opening fence with optional language tag, then everything up to the next
// fence. An unterminated fence runs to the end of the document.
static FENCED_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w*)\n(.*?)(?:```|\z)").expect("Failed to compile fenced block regex"));

#[derive(Debug, Clone, Copy, Default)]
pub struct CodeBlockExtract;

impl CodeBlockExtract {
    /// Byte ranges of every fenced region, opening fence to closing fence
    pub fn fenced_ranges(text: &str) -> Vec<Range<usize>> {
        FENCED_BLOCK_REGEX.find_iter(text).map(|m| m.range()).collect()
    }

    fn build_block(language: &str, raw: &str) -> ProtectedBlock {
        let content = unshield(raw).trim().to_string();
        let html = format!("<pre><code>{}</code></pre>", escape_html(&content));
        ProtectedBlock {
            language: language.to_string(),
            content,
            html,
        }
    }
}

impl Stage for CodeBlockExtract {
    fn name(&self) -> &'static str {
        "code-block-extract"
    }

    fn description(&self) -> &'static str {
        "Replace fenced code blocks with placeholder tokens"
    }

    fn category(&self) -> StageCategory {
        StageCategory::Protect
    }

    fn should_skip(&self, text: &str) -> bool {
        !text.contains("```") && !needs_shield(text)
    }

    fn apply(&self, text: &str, blocks: &mut ProtectedBlocks) -> String {
        // Literal prefixes in the source must not read as tokens later on
        let text = shield(text);
        FENCED_BLOCK_REGEX
            .replace_all(&text, |caps: &regex::Captures| {
                let block = Self::build_block(&caps[1], &caps[2]);
                log::trace!(
                    "[code-block-extract] block {} ({} bytes, language {:?})",
                    blocks.len(),
                    block.content.len(),
                    block.language
                );
                blocks.push(block)
            })
            .into_owned()
    }
}
