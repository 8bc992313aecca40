//! Blank-line segmentation of raw documents.

use alloc::vec::Vec;
use core::ops::Range;

/// Splits `raw` into trimmed, non-empty blocks separated by blank lines.
pub fn segment(raw: &str) -> Vec<&str> {
    segment_ranges(raw)
        .into_iter()
        .map(|range| &raw[range])
        .collect()
}

/// Byte ranges of the blocks returned by [`segment`].
///
/// A blank line is a line feed directly followed by another line feed, or by
/// `\r\n`. Longer blank runs yield empty pieces, which are dropped.
pub fn segment_ranges(raw: &str) -> Vec<Range<usize>> {
    let bytes = raw.as_bytes();
    let mut ranges = Vec::new();
    let mut start = 0usize;
    let mut cursor = 0usize;

    while cursor < bytes.len() {
        if bytes[cursor] == b'\n' {
            if let Some(separator_len) = blank_line_at(bytes, cursor) {
                push_trimmed(raw, start..cursor, &mut ranges);
                cursor += separator_len;
                start = cursor;
                continue;
            }
        }
        cursor += 1;
    }

    push_trimmed(raw, start..bytes.len(), &mut ranges);
    ranges
}

fn blank_line_at(bytes: &[u8], line_feed: usize) -> Option<usize> {
    match bytes.get(line_feed + 1) {
        Some(b'\n') => Some(2),
        Some(b'\r') if bytes.get(line_feed + 2) == Some(&b'\n') => Some(3),
        _ => None,
    }
}

fn push_trimmed(raw: &str, piece: Range<usize>, out: &mut Vec<Range<usize>>) {
    let text = &raw[piece.clone()];
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return;
    }

    let start = piece.start + (text.len() - text.trim_start().len());
    out.push(start..start + trimmed.len());
}
