//!
//! Protected regions: fenced code blocks lifted out of the document before any
//! other rewrite runs, and the placeholder tokens that stand in for them.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Prefix shared by every placeholder token.
pub const PLACEHOLDER_PREFIX: &str = "[[CODE_BLOCK_";

const PLACEHOLDER_SUFFIX: &str = "]]";

/// Private-use escape character for literal prefixes typed in the source.
///
/// Shielded text encodes `SHIELD` as `SHIELD '0'` and a literal
/// `[[CODE_BLOCK_` as `[[ SHIELD '1' CODE_BLOCK_`, so the only placeholder
/// tokens left in a document are the ones the extractor wrote.
pub const SHIELD: char = '\u{E000}';

const SHIELDED_SHIELD: &str = "\u{E000}0";
const SHIELDED_PREFIX: &str = "[[\u{E000}1CODE_BLOCK_";

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[CODE_BLOCK_(\d+)\]\]").expect("Failed to compile placeholder regex"));

/// A fenced code block extracted from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedBlock {
    /// Language tag from the opening fence, empty when absent
    pub language: String,
    /// Fence content with surrounding whitespace trimmed
    pub content: String,
    /// Final `<pre><code>` fragment, already escaped
    pub html: String,
}

/// Ordered accumulator of protected blocks, threaded through the pipeline.
///
/// Indices are assigned in insertion order and never reused, so the length of
/// the list doubles as the next placeholder number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectedBlocks {
    blocks: Vec<ProtectedBlock>,
}

impl ProtectedBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a block and return the placeholder token that refers to it.
    pub fn push(&mut self, block: ProtectedBlock) -> String {
        let token = placeholder(self.blocks.len());
        self.blocks.push(block);
        token
    }

    pub fn get(&self, index: usize) -> Option<&ProtectedBlock> {
        self.blocks.get(index)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProtectedBlock> {
        self.blocks.iter()
    }

    /// Replace every placeholder token in `text` with its block's fragment
    /// and unshield the text around them.
    ///
    /// Tokens pointing past the end of the list are left as they are. Block
    /// fragments are inserted verbatim.
    pub fn restore(&self, text: &str) -> String {
        if !text.contains(PLACEHOLDER_PREFIX) && !text.contains(SHIELD) {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for caps in PLACEHOLDER_REGEX.captures_iter(text) {
            let Some(m) = caps.get(0) else {
                continue;
            };
            out.push_str(&unshield(&text[last..m.start()]));
            match caps[1].parse::<usize>().ok().and_then(|index| self.blocks.get(index)) {
                Some(block) => out.push_str(&block.html),
                None => out.push_str(m.as_str()),
            }
            last = m.end();
        }
        out.push_str(&unshield(&text[last..]));
        out
    }
}

/// Escape literal placeholder prefixes (and the escape character itself) so
/// they can never be mistaken for extractor tokens.
pub fn shield(text: &str) -> Cow<'_, str> {
    if !needs_shield(text) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.replace(SHIELD, SHIELDED_SHIELD)
            .replace(PLACEHOLDER_PREFIX, SHIELDED_PREFIX),
    )
}

/// Check whether `shield` would change `text`
pub fn needs_shield(text: &str) -> bool {
    text.contains(PLACEHOLDER_PREFIX) || text.contains(SHIELD)
}

/// Inverse of [`shield`].
pub fn unshield(text: &str) -> Cow<'_, str> {
    if !text.contains(SHIELD) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != SHIELD {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push(SHIELD),
            // Dropping the marker turns `[[` back into a literal prefix
            Some('1') => {}
            Some(other) => {
                out.push(SHIELD);
                out.push(other);
            }
            None => out.push(SHIELD),
        }
    }
    Cow::Owned(out)
}

/// Build the placeholder token for a block index.
pub fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{index}{PLACEHOLDER_SUFFIX}")
}

/// Check whether a trimmed line starts with a placeholder token
pub fn is_placeholder_line(trimmed: &str) -> bool {
    trimmed.starts_with(PLACEHOLDER_PREFIX)
}
