pub mod blockquote;
pub mod code_block_extract;
pub mod code_block_restore;
pub mod emphasis;
pub mod headings;
pub mod horizontal_rule;
pub mod inline_code;
pub mod links;
pub mod lists;
pub mod paragraphs;
pub mod strong;
pub mod tables;

pub use blockquote::Blockquotes;
pub use code_block_extract::CodeBlockExtract;
pub use code_block_restore::CodeBlockRestore;
pub use emphasis::Emphasis;
pub use headings::Headings;
pub use horizontal_rule::HorizontalRule;
pub use inline_code::InlineCode;
pub use links::Links;
pub use lists::ListGrouping;
pub use paragraphs::Paragraphs;
pub use strong::Strong;
pub use tables::Tables;

use crate::stage::Stage;
use regex::{Regex, Replacer};
use std::ops::Range;
use std::sync::LazyLock;

/// Returns every stage in pipeline order.
///
/// The order is load-bearing: horizontal rules before headings and emphasis,
/// inline code before bold, bold before italic, and so on.
pub fn all_stages() -> Vec<Box<dyn Stage>> {
    vec![
        Box::new(CodeBlockExtract),
        Box::new(HorizontalRule),
        Box::new(Headings),
        Box::new(Blockquotes),
        Box::new(Tables),
        Box::new(InlineCode),
        Box::new(Strong),
        Box::new(Emphasis),
        Box::new(Links),
        Box::new(ListGrouping),
        Box::new(Paragraphs),
        Box::new(CodeBlockRestore),
    ]
}

static CODE_SPAN_HTML_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<code>.*?</code>").expect("Failed to compile code span regex"));

fn code_span_ranges(text: &str) -> Vec<Range<usize>> {
    CODE_SPAN_HTML_REGEX.find_iter(text).map(|m| m.range()).collect()
}

/// Span holding `pos`, if any. `spans` are sorted and disjoint.
fn span_containing(spans: &[Range<usize>], pos: usize) -> Option<&Range<usize>> {
    let index = spans.partition_point(|r| r.end <= pos);
    spans.get(index).filter(|r| r.start <= pos)
}

/// Global leftmost non-overlapping replacement that ignores matches whose
/// opening or closing delimiter sits inside a rendered `<code>` span.
pub(crate) fn replace_outside_code_spans<R: Replacer>(text: &str, re: &Regex, mut rep: R) -> String {
    let spans = code_span_ranges(text);
    if spans.is_empty() {
        return re.replace_all(text, rep).into_owned();
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut pos = 0;

    while pos <= text.len() {
        let Some(caps) = re.captures_at(text, pos) else {
            break;
        };
        let Some(m) = caps.get(0) else {
            break;
        };

        let next_char = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
        if m.is_empty() {
            pos = next_char;
            continue;
        }
        // No match can start inside a span, so skip the whole span
        if let Some(span) = span_containing(&spans, m.start()) {
            pos = span.end;
            continue;
        }
        if span_containing(&spans, m.end() - 1).is_some() {
            pos = next_char;
            continue;
        }

        out.push_str(&text[last..m.start()]);
        rep.replace_append(&caps, &mut out);
        last = m.end();
        pos = m.end();
    }

    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::StageCategory;

    #[test]
    fn test_stage_order_follows_categories() {
        let stages = all_stages();
        let categories: Vec<StageCategory> = stages.iter().map(|s| s.category()).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }

    #[test]
    fn test_stage_names_are_unique() {
        let stages = all_stages();
        let mut names: Vec<&str> = stages.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), stages.len());
    }

    #[test]
    fn test_ordering_constraints() {
        let names: Vec<&str> = all_stages().iter().map(|s| s.name()).collect();
        let index = |name: &str| names.iter().position(|n| *n == name).unwrap();

        assert!(index("horizontal-rule") < index("headings"));
        assert!(index("horizontal-rule") < index("strong"));
        assert!(index("inline-code") < index("strong"));
        assert!(index("strong") < index("emphasis"));
        assert!(index("emphasis") < index("links"));
        assert!(index("lists") < index("paragraphs"));
        assert_eq!(names.first(), Some(&"code-block-extract"));
        assert_eq!(names.last(), Some(&"code-block-restore"));
    }

    #[test]
    fn test_replace_outside_code_spans_skips_spans() {
        let re = Regex::new(r"\*\*(.+?)\*\*").unwrap();
        let text = "<code>**a**</code> **b**";
        assert_eq!(
            replace_outside_code_spans(text, &re, "<strong>$1</strong>"),
            "<code>**a**</code> <strong>b</strong>"
        );
    }

    #[test]
    fn test_replace_outside_code_spans_allows_wrapping_a_span() {
        let re = Regex::new(r"\*\*(.+?)\*\*").unwrap();
        let text = "**see <code>x</code>**";
        assert_eq!(
            replace_outside_code_spans(text, &re, "<strong>$1</strong>"),
            "<strong>see <code>x</code></strong>"
        );
    }

    #[test]
    fn test_replace_outside_code_spans_many_spans_on_one_line() {
        let re = Regex::new(r"\*(.+?)\*").unwrap();
        let spans = "<code>*</code> ".repeat(20_000);
        let text = format!("{spans}*x*");
        assert_eq!(replace_outside_code_spans(&text, &re, "<em>$1</em>"), format!("{spans}<em>x</em>"));
    }

    #[test]
    fn test_span_containing() {
        let spans = vec![2..5, 8..10];
        assert_eq!(span_containing(&spans, 0), None);
        assert_eq!(span_containing(&spans, 2), Some(&(2..5)));
        assert_eq!(span_containing(&spans, 4), Some(&(2..5)));
        assert_eq!(span_containing(&spans, 5), None);
        assert_eq!(span_containing(&spans, 9), Some(&(8..10)));
        assert_eq!(span_containing(&spans, 10), None);
    }

    #[test]
    fn test_replace_outside_code_spans_handles_multibyte_retry() {
        let re = Regex::new(r"\*(.+?)\*").unwrap();
        let text = "<code>é*ü*</code> *ok*";
        assert_eq!(
            replace_outside_code_spans(text, &re, "<em>$1</em>"),
            "<code>é*ü*</code> <em>ok</em>"
        );
    }
}
