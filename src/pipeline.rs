//!
//! The ordered stage list and the driver loop that runs markdown through it.

use crate::protected::ProtectedBlocks;
use crate::stage::Stage;
use crate::stages::all_stages;
use crate::utils::line_ending::{restore_line_endings, to_lf};

/// Output of a pipeline run: the HTML fragment plus the blocks that were
/// protected along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub html: String,
    pub blocks: ProtectedBlocks,
}

/// An explicit, ordered list of rewrite stages.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(all_stages())
    }
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn stages(&self) -> &[Box<dyn Stage>] {
        &self.stages
    }

    /// Render markdown into an HTML fragment
    pub fn render(&self, markdown: &str) -> String {
        self.render_document(markdown).html
    }

    /// Render markdown, keeping the protected block list for inspection.
    ///
    /// CRLF input is processed as LF and converted back on the way out.
    pub fn render_document(&self, markdown: &str) -> RenderedDocument {
        let mut blocks = ProtectedBlocks::new();
        let mut text = to_lf(markdown);

        for stage in &self.stages {
            if stage.should_skip(&text) {
                log::trace!("[pipeline] skipping stage {}", stage.name());
                continue;
            }
            text = stage.apply(&text, &mut blocks);
            log::trace!("[pipeline] stage {} -> {} bytes", stage.name(), text.len());
        }

        log::debug!(
            "[pipeline] rendered {} bytes of markdown into {} bytes ({} code blocks)",
            markdown.len(),
            text.len(),
            blocks.len()
        );

        RenderedDocument {
            html: restore_line_endings(markdown, text),
            blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::{Headings, Paragraphs};

    #[test]
    fn test_default_pipeline_has_all_stages() {
        assert_eq!(Pipeline::default().stages().len(), all_stages().len());
    }

    #[test]
    fn test_custom_stage_list() {
        let pipeline = Pipeline::new(vec![Box::new(Headings), Box::new(Paragraphs)]);
        assert_eq!(pipeline.render("# T\n**b**"), "<h1>T</h1>\n<p>**b**</p>");
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = Pipeline::new(Vec::new());
        assert_eq!(pipeline.render("# x"), "# x");
    }

    #[test]
    fn test_crlf_round_trip() {
        let html = Pipeline::default().render("# T\r\n\r\nbody");
        assert_eq!(html, "<h1>T</h1>\r\n\r\n<p>body</p>");
    }

    #[test]
    fn test_render_document_exposes_blocks() {
        let doc = Pipeline::default().render_document("```\na\n```\n\n```\nb\n```");
        assert_eq!(doc.blocks.len(), 2);
        assert!(!doc.html.contains("CODE_BLOCK"));
    }
}
