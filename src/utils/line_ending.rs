#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    Crlf,
    Mixed,
}

pub fn detect_line_ending(content: &str) -> LineEnding {
    let has_crlf = content.contains("\r\n");
    // LF characters that are not part of a CRLF pair
    let has_standalone_lf = content.replace("\r\n", "").contains('\n');

    match (has_crlf, has_standalone_lf) {
        (true, true) => LineEnding::Mixed,
        (true, false) => LineEnding::Crlf,
        _ => LineEnding::Lf,
    }
}

/// Convert all line endings in `content` to LF.
pub fn to_lf(content: &str) -> String {
    content.replace("\r\n", "\n")
}

/// Re-apply the line ending style of `original` to LF-only `rendered` output.
///
/// Mixed input is left as LF; there is no single style to restore.
pub fn restore_line_endings(original: &str, rendered: String) -> String {
    match detect_line_ending(original) {
        LineEnding::Crlf => rendered.replace('\n', "\r\n"),
        LineEnding::Lf | LineEnding::Mixed => rendered,
    }
}
