use crate::protected::{PLACEHOLDER_PREFIX, ProtectedBlocks, SHIELD};
use crate::stage::{Stage, StageCategory};

#[derive(Debug, Clone, Copy, Default)]
pub struct CodeBlockRestore;

impl Stage for CodeBlockRestore {
    fn name(&self) -> &'static str {
        "code-block-restore"
    }

    fn description(&self) -> &'static str {
        "Replace placeholder tokens with their rendered code blocks"
    }

    fn category(&self) -> StageCategory {
        StageCategory::Restore
    }

    fn should_skip(&self, text: &str) -> bool {
        !text.contains(PLACEHOLDER_PREFIX) && !text.contains(SHIELD)
    }

    fn apply(&self, text: &str, blocks: &mut ProtectedBlocks) -> String {
        blocks.restore(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::CodeBlockExtract;

    #[test]
    fn test_restores_extracted_blocks() {
        let mut blocks = ProtectedBlocks::new();
        let extracted = CodeBlockExtract.apply("a\n```\n<b>\n```\nc", &mut blocks);
        let restored = CodeBlockRestore.apply(&extracted, &mut blocks);
        assert_eq!(restored, "a\n<pre><code>&lt;b&gt;</code></pre>\nc");
    }

    #[test]
    fn test_literal_token_survives_round_trip() {
        let mut blocks = ProtectedBlocks::new();
        let extracted = CodeBlockExtract.apply("[[CODE_BLOCK_0]]\n```\nx\n```", &mut blocks);
        assert!(!CodeBlockRestore.should_skip(&extracted));
        let restored = CodeBlockRestore.apply(&extracted, &mut blocks);
        assert_eq!(restored, "[[CODE_BLOCK_0]]\n<pre><code>x</code></pre>");
    }

    #[test]
    fn test_restore_without_blocks_is_identity() {
        let mut blocks = ProtectedBlocks::new();
        assert_eq!(CodeBlockRestore.apply("<p>x</p>", &mut blocks), "<p>x</p>");
    }
}
