//! User-facing strings: status lines, labels and compact previews.

use alloc::{format, string::String};
use core::fmt::Write;

use heapless::String as LabelString;

use crate::estimate::ReadingTime;

pub const COMPACT_MAX_WORDS: usize = 7;
pub const COMPACT_MAX_CHARS: usize = 34;
pub const PREVIEW_BYTES: usize = 160;
pub const LABEL_BYTES: usize = 64;

pub const NO_FILE_HINT: &str = "Load a file to estimate reading time.";
pub const EMPTY_FILE_HINT: &str = "The loaded file is empty or contains no readable text.";
pub const NO_SEGMENTS_MESSAGE: &str =
    "No text loaded or the text contains no valid segments. Load a text or markdown file.";

pub type Label = LabelString<LABEL_BYTES>;
pub type Preview = LabelString<PREVIEW_BYTES>;

pub fn preview_compact(source: &str) -> Preview {
    preview_limited(source, COMPACT_MAX_WORDS, COMPACT_MAX_CHARS)
}

/// First words of `source` on one line, `...` appended when anything was cut.
pub fn preview_limited(source: &str, max_words: usize, max_chars: usize) -> Preview {
    let mut out = Preview::new();
    let mut char_count = 0usize;
    let mut truncated = false;

    'words: for (word_count, word) in source.split_whitespace().enumerate() {
        if word_count >= max_words {
            truncated = true;
            break;
        }

        if word_count > 0 {
            if char_count >= max_chars || out.push(' ').is_err() {
                truncated = true;
                break;
            }
            char_count += 1;
        }

        for ch in word.chars() {
            if char_count >= max_chars || out.len() + ch.len_utf8() + 3 > PREVIEW_BYTES {
                truncated = true;
                break 'words;
            }
            let _ = out.push(ch);
            char_count += 1;
        }
    }

    if truncated && !out.is_empty() {
        let _ = out.push_str("...");
    }
    out
}

/// `"Segment 3 of 12"` for the zero-based `index`.
pub fn segment_position_label(index: usize, total: usize) -> Label {
    let mut out = Label::new();
    let _ = write!(out, "Segment {} of {}", index.saturating_add(1), total);
    out
}

pub fn word_total_label(word_count: usize) -> Label {
    let mut out = Label::new();
    let _ = write!(out, "Total words (annotations excluded): {word_count}");
    out
}

/// Sidebar line for an estimate: `"About 2 minutes"` or the outcome's message.
pub fn reading_time_line(time: ReadingTime) -> Label {
    let mut out = Label::new();
    let _ = match time {
        ReadingTime::Duration { .. } => write!(out, "About {time}"),
        ReadingTime::InvalidRate => out.write_str("Reading speed must be greater than 0."),
        ReadingTime::NothingToRead => out.write_str("Nothing to read."),
        ReadingTime::UnderOneSecond => out.write_str("Less than 1 second."),
    };
    out
}

pub fn loaded_message(name: &str, segment_count: usize) -> String {
    let unit = if segment_count == 1 {
        "segment"
    } else {
        "segments"
    };
    format!("Loaded '{name}' ({segment_count} {unit}).")
}

/// Reopening the name already loaded is a no-op; say so instead of "Loaded".
pub fn already_loaded_message(name: &str) -> String {
    format!("'{name}' is already loaded; nothing changed.")
}

pub fn load_failed_message(name: &str, error: &dyn core::fmt::Display) -> String {
    format!("Could not read '{name}': {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_preview_truncates_words() {
        let preview = preview_compact("one two three four five six seven eight");
        assert_eq!(preview.as_str(), "one two three four five six seven...");
    }

    #[test]
    fn preview_flattens_line_breaks() {
        assert_eq!(preview_compact("Hello\n  world").as_str(), "Hello world");
        assert_eq!(preview_compact("   ").as_str(), "");
    }

    #[test]
    fn preview_respects_char_limit() {
        let preview = preview_limited("abcdefghij klm", 10, 5);
        assert_eq!(preview.as_str(), "abcde...");
    }

    #[test]
    fn preview_counts_chars_not_bytes() {
        let preview = preview_limited("perché così", 10, 8);
        assert_eq!(preview.as_str(), "perché c...");
    }

    #[test]
    fn labels() {
        assert_eq!(segment_position_label(0, 3).as_str(), "Segment 1 of 3");
        assert_eq!(
            word_total_label(42).as_str(),
            "Total words (annotations excluded): 42"
        );
    }

    #[test]
    fn reading_time_lines() {
        let line = reading_time_line(ReadingTime::Duration {
            minutes: 1,
            seconds: 20,
        });
        assert_eq!(line.as_str(), "About 1 minute and 20 seconds");
        assert_eq!(
            reading_time_line(ReadingTime::InvalidRate).as_str(),
            "Reading speed must be greater than 0."
        );
        assert_eq!(
            reading_time_line(ReadingTime::NothingToRead).as_str(),
            "Nothing to read."
        );
        assert_eq!(
            reading_time_line(ReadingTime::UnderOneSecond).as_str(),
            "Less than 1 second."
        );
    }

    #[test]
    fn load_messages() {
        assert_eq!(loaded_message("a.md", 1), "Loaded 'a.md' (1 segment).");
        assert_eq!(loaded_message("a.md", 4), "Loaded 'a.md' (4 segments).");
        assert_eq!(
            already_loaded_message("a.md"),
            "'a.md' is already loaded; nothing changed."
        );
        assert_eq!(
            load_failed_message("b.md", &"bad bytes"),
            "Could not read 'b.md': bad bytes"
        );
    }
}
