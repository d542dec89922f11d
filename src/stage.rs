//!
//! This module defines the Stage trait implemented by every rewrite pass of the
//! markdown pipeline, along with stage categories used for ordering checks.

use crate::protected::ProtectedBlocks;

/// Broad phase a stage belongs to. Phases run in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StageCategory {
    /// Lifts verbatim regions out of the document
    Protect,
    /// Line-anchored block constructs
    Block,
    /// Global inline substitutions
    Inline,
    /// Multi-line grouping (lists)
    Grouping,
    /// Final line classification (paragraphs)
    Wrap,
    /// Puts protected regions back
    Restore,
}

/// A single whole-text rewrite pass.
///
/// Stages never fail: malformed markdown degrades to a deterministic fallback
/// instead of an error. Only the protect and restore stages touch `blocks`.
pub trait Stage: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn category(&self) -> StageCategory;
    fn apply(&self, text: &str, blocks: &mut ProtectedBlocks) -> String;

    /// Cheap pre-check; a stage that returns true is skipped entirely
    fn should_skip(&self, _text: &str) -> bool {
        false
    }
}
