use crate::protected::ProtectedBlocks;
use crate::stage::{Stage, StageCategory};
use crate::utils::table_utils::{TableBlock, TableUtils};

/// Collapses each run of pipe-delimited lines into a single `<table>` line.
///
/// Delimiter rows are dropped; the first remaining row becomes the header.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tables;

impl Tables {
    fn render_row(row: &str, cell_tag: &str) -> String {
        let cells: String = TableUtils::split_cells(row)
            .into_iter()
            .map(|cell| format!("<{cell_tag}>{cell}</{cell_tag}>"))
            .collect();
        format!("<tr>{cells}</tr>")
    }

    /// Render a table run, or `None` when it holds nothing but delimiter rows
    fn render_table(rows: &[&str]) -> Option<String> {
        let content_rows: Vec<&str> = rows
            .iter()
            .copied()
            .filter(|row| !TableUtils::is_delimiter_row(row))
            .collect();
        let (header, body) = content_rows.split_first()?;

        let mut html = String::from("<table>");
        html.push_str(&Self::render_row(header, "th"));
        for row in body {
            html.push_str(&Self::render_row(row, "td"));
        }
        html.push_str("</table>");
        Some(html)
    }
}

impl Stage for Tables {
    fn name(&self) -> &'static str {
        "tables"
    }

    fn description(&self) -> &'static str {
        "Render runs of pipe-delimited rows as tables"
    }

    fn category(&self) -> StageCategory {
        StageCategory::Block
    }

    fn should_skip(&self, text: &str) -> bool {
        !text.contains('|')
    }

    fn apply(&self, text: &str, _blocks: &mut ProtectedBlocks) -> String {
        let lines: Vec<&str> = text.split('\n').collect();
        let tables = TableUtils::find_table_blocks(&lines);
        if tables.is_empty() {
            return text.to_string();
        }

        let mut out: Vec<String> = Vec::with_capacity(lines.len());
        let mut next_line = 0;
        for TableBlock { start_line, end_line } in tables {
            out.extend(lines[next_line..start_line].iter().map(|l| l.to_string()));
            let run = &lines[start_line..=end_line];
            match Self::render_table(run) {
                Some(html) => out.push(html),
                None => out.extend(run.iter().map(|l| l.to_string())),
            }
            next_line = end_line + 1;
        }
        out.extend(lines[next_line..].iter().map(|l| l.to_string()));

        out.join("\n")
    }
}
