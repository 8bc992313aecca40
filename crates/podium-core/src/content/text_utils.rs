//! Annotation-aware word counting.

use crate::annotation::strip_annotations;

/// Counts the words of a whole document, leaving annotations out.
///
/// Spans are deleted before the whitespace split, so two words joined only by
/// an annotation (`"cat[pause]dog"`) count as one.
pub fn count_words(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    count_plain_words(&strip_annotations(text))
}

/// Whitespace-separated token count, runs of any Unicode whitespace collapsed.
pub fn count_plain_words(text: &str) -> usize {
    text.split_whitespace().count()
}
