pub mod config;
pub mod exit_codes;
pub mod init;
pub mod pipeline;
pub mod protected;
pub mod site;
pub mod stage;
pub mod stages;
pub mod utils;

pub use crate::pipeline::{Pipeline, RenderedDocument};
pub use crate::protected::{ProtectedBlock, ProtectedBlocks};
pub use crate::stage::{Stage, StageCategory};

use std::sync::LazyLock;

static DEFAULT_PIPELINE: LazyLock<Pipeline> = LazyLock::new(Pipeline::default);

/// Convert markdown text into an HTML fragment.
///
/// Total over any input: malformed markdown degrades to plain paragraphs
/// rather than failing.
pub fn transform(markdown: &str) -> String {
    DEFAULT_PIPELINE.render(markdown)
}
