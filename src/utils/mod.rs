pub mod html;
pub mod table_utils;
pub mod line_ending;

pub use html::escape_html;

/// Apply `f` to every line of `text`, keeping the line structure intact.
///
/// Splits on `\n` only, so a trailing newline yields a trailing empty line
/// and is preserved on rejoin.
pub fn map_lines<F>(text: &str, mut f: F) -> String
where
    F: FnMut(&str) -> String,
{
    text.split('\n').map(|line| f(line)).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_lines_preserves_trailing_newline() {
        assert_eq!(map_lines("a\nb\n", |l| l.to_uppercase()), "A\nB\n");
        assert_eq!(map_lines("", |l| format!("[{l}]")), "[]");
    }
}
