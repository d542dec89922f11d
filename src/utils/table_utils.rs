//! Table detection shared by the table stage.
//!
//! A table is a maximal run of consecutive pipe-delimited lines. There is no
//! requirement for a delimiter row; when one is present it is dropped.

/// A run of table rows, by line index (inclusive on both ends)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    pub start_line: usize,
    pub end_line: usize,
}

/// Shared table detection utilities
pub struct TableUtils;

impl TableUtils {
    /// Check if a line is shaped like a table row: leading and trailing pipe
    /// plus at least one interior pipe.
    pub fn is_table_row(line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.len() < 3 || !trimmed.starts_with('|') || !trimmed.ends_with('|') {
            return false;
        }

        trimmed[1..trimmed.len() - 1].contains('|')
    }

    /// Split a row into trimmed cell texts
    pub fn split_cells(row: &str) -> Vec<&str> {
        row.trim().trim_matches('|').split('|').map(str::trim).collect()
    }

    /// Check if a row is a delimiter row (e.g., `| --- | :---: |`)
    pub fn is_delimiter_row(row: &str) -> bool {
        Self::split_cells(row).iter().all(|cell| {
            let inner = cell.trim_start_matches(':').trim_end_matches(':');
            !inner.is_empty() && inner.chars().all(|c| c == '-')
        })
    }

    /// Find all table blocks among `lines`
    pub fn find_table_blocks(lines: &[&str]) -> Vec<TableBlock> {
        let mut tables = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            if !Self::is_table_row(lines[i]) {
                i += 1;
                continue;
            }

            let start_line = i;
            while i + 1 < lines.len() && Self::is_table_row(lines[i + 1]) {
                i += 1;
            }
            tables.push(TableBlock {
                start_line,
                end_line: i,
            });
            i += 1;
        }

        tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_table_row() {
        assert!(TableUtils::is_table_row("| a | b |"));
        assert!(TableUtils::is_table_row("  |a|b|  "));
        assert!(TableUtils::is_table_row("| --- | --- |"));

        // No interior pipe
        assert!(!TableUtils::is_table_row("| a |"));
        assert!(!TableUtils::is_table_row("||"));
        assert!(!TableUtils::is_table_row("|"));
        // Missing outer pipes
        assert!(!TableUtils::is_table_row("a | b"));
        assert!(!TableUtils::is_table_row("| a | b"));
        assert!(!TableUtils::is_table_row(""));
    }

    #[test]
    fn test_split_cells() {
        assert_eq!(TableUtils::split_cells("| a | b |"), vec!["a", "b"]);
        assert_eq!(TableUtils::split_cells("|a||c|"), vec!["a", "", "c"]);
        assert_eq!(TableUtils::split_cells("  | x |y|  "), vec!["x", "y"]);
    }

    #[test]
    fn test_is_delimiter_row() {
        assert!(TableUtils::is_delimiter_row("| --- | --- |"));
        assert!(TableUtils::is_delimiter_row("|:---|---:|:-:|"));
        assert!(!TableUtils::is_delimiter_row("| --- | a |"));
        assert!(!TableUtils::is_delimiter_row("| --- | |"));
        assert!(!TableUtils::is_delimiter_row("| : | --- |"));
    }

    #[test]
    fn test_find_table_blocks() {
        let lines = vec!["text", "| a | b |", "|---|---|", "| 1 | 2 |", "", "| c | d |", "more"];
        let tables = TableUtils::find_table_blocks(&lines);
        assert_eq!(
            tables,
            vec![
                TableBlock {
                    start_line: 1,
                    end_line: 3
                },
                TableBlock {
                    start_line: 5,
                    end_line: 5
                },
            ]
        );
    }

    #[test]
    fn test_stray_pipe_line_is_not_a_table() {
        let lines = vec!["Intro text", "|", "Closing text"];
        assert!(TableUtils::find_table_blocks(&lines).is_empty());
    }
}
