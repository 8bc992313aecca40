//! Inline stage directions written as bracketed spans (`[pause]`, `[laughs]`).
//!
//! Matching is shortest-first and left to right: `"[A] mid [B]"` holds two
//! spans, never one running from the first `[` to the last `]`. A span never
//! crosses a line feed. A `[` met inside an open span is plain content, so
//! brackets do not nest.

use alloc::string::String;
use core::ops::Range;

/// Marker wrapped around each span by [`style_annotations`].
pub const EMPHASIS_MARKER: &str = "*";

/// Byte ranges of every annotation span in `text`, brackets included.
pub fn annotation_spans(text: &str) -> AnnotationSpans<'_> {
    AnnotationSpans { text, cursor: 0 }
}

/// Single-pass scanner behind [`annotation_spans`].
#[derive(Clone, Debug)]
pub struct AnnotationSpans<'a> {
    text: &'a str,
    cursor: usize,
}

impl Iterator for AnnotationSpans<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        let len = bytes.len();

        while self.cursor < len {
            let open = match bytes[self.cursor..].iter().position(|&b| b == b'[') {
                Some(offset) => self.cursor + offset,
                None => {
                    self.cursor = len;
                    return None;
                }
            };

            let mut scan = open + 1;
            while scan < len {
                match bytes[scan] {
                    b']' => {
                        self.cursor = scan + 1;
                        return Some(open..scan + 1);
                    }
                    b'\n' => break,
                    _ => scan += 1,
                }
            }

            // Every `[` between `open` and `scan` would hit the same line end.
            self.cursor = scan;
        }

        None
    }
}

/// Removes every span, leaving the surrounding text and its spacing as is.
pub fn strip_annotations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0usize;

    for span in annotation_spans(text) {
        out.push_str(&text[last..span.start]);
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}

/// Wraps each span in [`EMPHASIS_MARKER`]: `"a [b] c"` becomes `"a *[b]* c"`.
pub fn style_annotations(text: &str) -> String {
    style_annotations_with(text, EMPHASIS_MARKER, EMPHASIS_MARKER)
}

/// Wraps each span in caller-chosen markers, e.g. terminal italic escapes.
pub fn style_annotations_with(text: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0usize;

    for span in annotation_spans(text) {
        out.push_str(&text[last..span.start]);
        out.push_str(open);
        out.push_str(&text[span.clone()]);
        out.push_str(close);
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn spans(text: &str) -> Vec<&str> {
        annotation_spans(text).map(|r| &text[r]).collect()
    }

    #[test]
    fn matches_each_span_separately() {
        assert_eq!(spans("[A] mid [B]"), ["[A]", "[B]"]);
        assert_eq!(spans("Testo con [Pausa] e [Altra nota]"), ["[Pausa]", "[Altra nota]"]);
    }

    #[test]
    fn inner_open_bracket_is_content() {
        assert_eq!(spans("[a [b] c]"), ["[a [b]"]);
    }

    #[test]
    fn spans_stop_at_line_feed() {
        assert!(spans("[open\nclose]").is_empty());
        assert_eq!(spans("[x\n[y] z"), ["[y]"]);
    }

    #[test]
    fn empty_brackets_are_a_span() {
        assert_eq!(spans("a [] b"), ["[]"]);
        assert_eq!(strip_annotations("a [] b"), "a  b");
    }

    #[test]
    fn unmatched_brackets_are_left_alone() {
        assert!(spans("no close [here").is_empty());
        assert!(spans("] stray").is_empty());
        assert_eq!(style_annotations("] [x"), "] [x");
    }

    #[test]
    fn strip_keeps_surrounding_whitespace() {
        assert_eq!(strip_annotations("Hello [pause] world"), "Hello  world");
        assert_eq!(strip_annotations("cat[pause]dog"), "catdog");
        assert_eq!(strip_annotations(""), "");
    }

    #[test]
    fn style_wraps_brackets_too() {
        assert_eq!(
            style_annotations("Testo con [Pausa] e [Altra nota]"),
            "Testo con *[Pausa]* e *[Altra nota]*"
        );
        assert_eq!(style_annotations_with("a [b]", "<i>", "</i>"), "a <i>[b]</i>");
        assert_eq!(style_annotations(""), "");
    }

    #[test]
    fn multibyte_text_around_spans() {
        assert_eq!(strip_annotations("perché [sospiro] sì"), "perché  sì");
        assert_eq!(spans("¿[sí]?"), ["[sí]"]);
    }
}
