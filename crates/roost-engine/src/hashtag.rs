use std::sync::LazyLock;

use regex::Regex;

static HASHTAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").unwrap());

/// What a segment of post text is, for styling purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Plain,
    Hashtag,
}

/// A contiguous slice of post text with a single styling kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    pub text: &'a str,
}

/// Split post text into plain and hashtag segments.
///
/// Segments cover the input exactly, in order, so concatenating their
/// text reproduces the input. A `#` not followed by a word character
/// stays plain.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for m in HASHTAG_REGEX.find_iter(text) {
        if m.start() > cursor {
            out.push(Segment {
                kind: SegmentKind::Plain,
                text: &text[cursor..m.start()],
            });
        }
        out.push(Segment {
            kind: SegmentKind::Hashtag,
            text: m.as_str(),
        });
        cursor = m.end();
    }
    if cursor < text.len() {
        out.push(Segment {
            kind: SegmentKind::Plain,
            text: &text[cursor..],
        });
    }
    out
}
